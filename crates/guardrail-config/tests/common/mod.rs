// crates/guardrail-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for guardrail-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use guardrail_config::ConfigError;
use guardrail_config::GuardrailConfig;

/// Standard result type for config tests.
pub type TestResult = Result<(), String>;

/// Parses a TOML string into a `GuardrailConfig` without validation.
pub fn config_from_toml(toml_str: &str) -> Result<GuardrailConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<GuardrailConfig, toml::de::Error> {
    config_from_toml("")
}

/// Asserts that a result is an error whose message contains `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
