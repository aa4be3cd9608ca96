// crates/guardrail-config/src/config.rs
// ============================================================================
// Module: Guardrail Configuration
// Description: Configuration loading and validation for Guardrail.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: guardrail-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Unknown fields are rejected and every value is range-checked, so a typo
//! fails the load instead of silently falling back to a default. A validated
//! config converts into the process-wide [`GuardSettings`] and observer of
//! `guardrail-core`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use guardrail_core::GuardObserver;
use guardrail_core::GuardSettings;
use guardrail_core::InstallError;
use guardrail_core::NoopObserver;
use guardrail_core::ObserverLevel;
use guardrail_core::TracingObserver;
use guardrail_core::install_observer;
use guardrail_core::install_settings;
use guardrail_core::is_observer_installed;
use guardrail_core::is_settings_installed;
use guardrail_core::settings::DEFAULT_MAX_RENDERED_CHARS;
use guardrail_core::settings::DEFAULT_MAX_RENDERED_ITEMS;
use guardrail_core::settings::DEFAULT_TOLERANCE;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "guardrail.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "GUARDRAIL_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum allowed default tolerance.
pub const MAX_DEFAULT_TOLERANCE: f64 = 1.0;
/// Minimum allowed rendered characters per value.
pub const MIN_RENDERED_CHARS: usize = 16;
/// Maximum allowed rendered characters per value.
pub const MAX_RENDERED_CHARS: usize = 65_536;
/// Minimum allowed rendered items per collection.
pub const MIN_RENDERED_ITEMS: usize = 1;
/// Maximum allowed rendered items per collection.
pub const MAX_RENDERED_ITEMS: usize = 4_096;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Guardrail configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardrailConfig {
    /// Comparison defaults.
    #[serde(default)]
    pub comparison: ComparisonConfig,
    /// Message rendering limits.
    #[serde(default)]
    pub messages: MessageConfig,
    /// Violation observer configuration.
    #[serde(default)]
    pub observer: ObserverConfig,
}

impl GuardrailConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.comparison.validate()?;
        self.messages.validate()?;
        Ok(())
    }

    /// Returns the core settings described by this configuration.
    #[must_use]
    pub const fn to_settings(&self) -> GuardSettings {
        GuardSettings {
            default_tolerance: self.comparison.default_tolerance,
            max_rendered_chars: self.messages.max_rendered_chars,
            max_rendered_items: self.messages.max_rendered_items,
        }
    }

    /// Builds the observer described by this configuration.
    #[must_use]
    pub fn build_observer(&self) -> Box<dyn GuardObserver> {
        match self.observer.mode {
            ObserverMode::None => Box::new(NoopObserver),
            ObserverMode::Tracing => Box::new(TracingObserver::new(self.observer.level)),
        }
    }

    /// Validates the configuration, then installs settings and observer
    /// process-wide.
    ///
    /// Both slots are checked before either is written, so a rejected install
    /// leaves process state unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when validation fails or guard state was
    /// already installed.
    pub fn install(&self) -> Result<(), ConfigError> {
        self.validate()?;
        let settings = self.to_settings();
        settings.validate()?;
        let wants_observer = self.observer.mode != ObserverMode::None;
        if is_settings_installed() {
            return Err(InstallError::SettingsAlreadyInstalled.into());
        }
        if wants_observer && is_observer_installed() {
            return Err(InstallError::ObserverAlreadyInstalled.into());
        }
        install_settings(settings)?;
        if wants_observer {
            install_observer(self.build_observer())?;
        }
        Ok(())
    }
}

/// Comparison defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Tolerance used by default approximate comparisons.
    #[serde(default = "default_tolerance")]
    pub default_tolerance: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            default_tolerance: default_tolerance(),
        }
    }
}

impl ComparisonConfig {
    /// Validates comparison defaults.
    fn validate(&self) -> Result<(), ConfigError> {
        let tolerance = self.default_tolerance;
        if !tolerance.is_finite() {
            return Err(ConfigError::Invalid(
                "comparison.default_tolerance must be finite".to_string(),
            ));
        }
        if tolerance <= 0.0 {
            return Err(ConfigError::Invalid(
                "comparison.default_tolerance must be greater than zero".to_string(),
            ));
        }
        if tolerance > MAX_DEFAULT_TOLERANCE {
            return Err(ConfigError::Invalid(format!(
                "comparison.default_tolerance must be at most {MAX_DEFAULT_TOLERANCE}"
            )));
        }
        Ok(())
    }
}

/// Message rendering limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageConfig {
    /// Maximum characters rendered for a single value.
    #[serde(default = "default_max_rendered_chars")]
    pub max_rendered_chars: usize,
    /// Maximum collection items rendered per message.
    #[serde(default = "default_max_rendered_items")]
    pub max_rendered_items: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            max_rendered_chars: default_max_rendered_chars(),
            max_rendered_items: default_max_rendered_items(),
        }
    }
}

impl MessageConfig {
    /// Validates rendering limits.
    fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_RENDERED_CHARS ..= MAX_RENDERED_CHARS).contains(&self.max_rendered_chars) {
            return Err(ConfigError::Invalid(format!(
                "messages.max_rendered_chars must be between {MIN_RENDERED_CHARS} and \
                 {MAX_RENDERED_CHARS}"
            )));
        }
        if !(MIN_RENDERED_ITEMS ..= MAX_RENDERED_ITEMS).contains(&self.max_rendered_items) {
            return Err(ConfigError::Invalid(format!(
                "messages.max_rendered_items must be between {MIN_RENDERED_ITEMS} and \
                 {MAX_RENDERED_ITEMS}"
            )));
        }
        Ok(())
    }
}

/// Violation observer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverConfig {
    /// Observer selection.
    #[serde(default)]
    pub mode: ObserverMode,
    /// Event severity for the tracing observer.
    #[serde(default)]
    pub level: ObserverLevel,
}

/// Observer selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObserverMode {
    /// Violations are not observed.
    #[default]
    None,
    /// Violations are emitted as `tracing` events.
    Tracing,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// Guard state could not be installed.
    #[error("config install error: {0}")]
    Install(#[from] InstallError),
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default for `comparison.default_tolerance`.
const fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

/// Default for `messages.max_rendered_chars`.
const fn default_max_rendered_chars() -> usize {
    DEFAULT_MAX_RENDERED_CHARS
}

/// Default for `messages.max_rendered_items`.
const fn default_max_rendered_items() -> usize {
    DEFAULT_MAX_RENDERED_ITEMS
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
