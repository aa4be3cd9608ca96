// crates/guardrail-core/src/settings.rs
// ============================================================================
// Module: Guard Settings
// Description: Process-wide defaults consulted by guard clauses.
// Purpose: Hold the default tolerance and message rendering limits.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Guard clauses are stateless, but a few defaults are process-wide: the
//! tolerance used by approximate comparisons and the caps applied when values
//! are rendered into diagnostic messages. Settings are installed at most once;
//! until then [`settings`] returns [`GuardSettings::default`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default tolerance for approximate floating-point comparisons.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;
/// Default maximum number of characters rendered per value.
pub const DEFAULT_MAX_RENDERED_CHARS: usize = 256;
/// Default maximum number of collection items rendered per message.
pub const DEFAULT_MAX_RENDERED_ITEMS: usize = 16;

/// Installed settings, set at most once per process.
static SETTINGS: OnceLock<GuardSettings> = OnceLock::new();
/// Fallback settings used until an install happens.
static DEFAULT_SETTINGS: GuardSettings = GuardSettings {
    default_tolerance: DEFAULT_TOLERANCE,
    max_rendered_chars: DEFAULT_MAX_RENDERED_CHARS,
    max_rendered_items: DEFAULT_MAX_RENDERED_ITEMS,
};

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Process-wide guard defaults.
///
/// # Invariants
/// - Installed settings have a finite, positive `default_tolerance`.
/// - Installed rendering caps are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuardSettings {
    /// Tolerance used by `is_approximately_default`.
    pub default_tolerance: f64,
    /// Maximum characters rendered for a single value in messages.
    pub max_rendered_chars: usize,
    /// Maximum collection items rendered in messages.
    pub max_rendered_items: usize,
}

impl Default for GuardSettings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

impl GuardSettings {
    /// Checks the values every guard relies on.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::InvalidSettings`] naming the offending field.
    pub fn validate(&self) -> Result<(), InstallError> {
        if !self.default_tolerance.is_finite() || self.default_tolerance <= 0.0 {
            return Err(InstallError::InvalidSettings("default_tolerance"));
        }
        if self.max_rendered_chars == 0 {
            return Err(InstallError::InvalidSettings("max_rendered_chars"));
        }
        if self.max_rendered_items == 0 {
            return Err(InstallError::InvalidSettings("max_rendered_items"));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Installation
// ============================================================================

/// Errors raised when installing process-wide guard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InstallError {
    /// Settings were already installed for this process.
    #[error("guard settings already installed")]
    SettingsAlreadyInstalled,
    /// An observer was already installed for this process.
    #[error("guard observer already installed")]
    ObserverAlreadyInstalled,
    /// Settings failed validation; carries the offending field.
    #[error("invalid guard settings: {0}")]
    InvalidSettings(&'static str),
}

/// Installs process-wide settings after validating them.
///
/// # Errors
///
/// Returns [`InstallError::InvalidSettings`] when validation fails and
/// [`InstallError::SettingsAlreadyInstalled`] when settings were installed
/// before.
pub fn install_settings(settings: GuardSettings) -> Result<(), InstallError> {
    settings.validate()?;
    SETTINGS.set(settings).map_err(|_| InstallError::SettingsAlreadyInstalled)
}

/// Returns true once settings have been installed.
#[must_use]
pub fn is_settings_installed() -> bool {
    SETTINGS.get().is_some()
}

/// Returns the installed settings, or the defaults when none were installed.
#[must_use]
pub fn settings() -> &'static GuardSettings {
    SETTINGS.get().unwrap_or(&DEFAULT_SETTINGS)
}
