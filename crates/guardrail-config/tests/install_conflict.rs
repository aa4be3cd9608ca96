//! Conflicting install tests for guardrail-config.
// crates/guardrail-config/tests/install_conflict.rs
// =============================================================================
// Module: Config Install Conflict Tests
// Description: Install a config after core already holds an observer.
// Purpose: Verify a rejected install leaves process-wide settings untouched.
// =============================================================================
//
// Installation is process-wide, so this suite runs as its own test binary and
// keeps every install in a single test.

use common::TestResult;
use guardrail_config::ConfigError;
use guardrail_config::GuardrailConfig;
use guardrail_core::GuardSettings;
use guardrail_core::InstallError;
use guardrail_core::NoopObserver;
use guardrail_core::install_observer;
use guardrail_core::is_settings_installed;
use guardrail_core::settings;

mod common;

#[test]
fn observer_conflict_leaves_settings_untouched() -> TestResult {
    install_observer(Box::new(NoopObserver)).map_err(|err| err.to_string())?;

    let tracing = GuardrailConfig::from_toml_str(
        "[comparison]\ndefault_tolerance = 0.5\n[observer]\nmode = \"tracing\"\n",
    )
    .map_err(|err| err.to_string())?;
    match tracing.install() {
        Err(ConfigError::Install(InstallError::ObserverAlreadyInstalled)) => {}
        Err(other) => return Err(format!("unexpected install error: {other}")),
        Ok(()) => return Err("install must fail while an observer is present".to_string()),
    }
    if is_settings_installed() || *settings() != GuardSettings::default() {
        return Err("a rejected install must not apply its settings".to_string());
    }

    let quiet = GuardrailConfig::from_toml_str("[comparison]\ndefault_tolerance = 0.25\n")
        .map_err(|err| err.to_string())?;
    quiet.install().map_err(|err| err.to_string())?;
    if settings().default_tolerance != 0.25 {
        return Err("a config without an observer should still install".to_string());
    }
    Ok(())
}
