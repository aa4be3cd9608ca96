//! Boundary validation tests for guardrail-config.
// crates/guardrail-config/tests/boundary_validation.rs
// =============================================================================
// Module: Boundary Validation Tests
// Description: Enforce the MIN_*/MAX_* limits and field strictness.
// Purpose: Ensure out-of-range and unknown values fail closed.
// =============================================================================

use common::TestResult;
use common::assert_invalid;
use common::minimal_config;
use guardrail_config::ConfigError;
use guardrail_config::GuardrailConfig;
use guardrail_config::MAX_DEFAULT_TOLERANCE;
use guardrail_config::MAX_RENDERED_CHARS;
use guardrail_config::MAX_RENDERED_ITEMS;
use guardrail_config::MIN_RENDERED_CHARS;
use guardrail_config::MIN_RENDERED_ITEMS;

mod common;

// ============================================================================
// SECTION: Comparison
// ============================================================================

#[test]
fn tolerance_at_max_is_accepted() -> TestResult {
    let mut config = minimal_config().map_err(|err| err.to_string())?;
    config.comparison.default_tolerance = MAX_DEFAULT_TOLERANCE;
    config.validate().map_err(|err| err.to_string())
}

#[test]
fn tolerance_above_max_is_rejected() -> TestResult {
    let mut config = minimal_config().map_err(|err| err.to_string())?;
    config.comparison.default_tolerance = MAX_DEFAULT_TOLERANCE * 2.0;
    assert_invalid(config.validate(), "must be at most")
}

#[test]
fn zero_tolerance_is_rejected() -> TestResult {
    let mut config = minimal_config().map_err(|err| err.to_string())?;
    config.comparison.default_tolerance = 0.0;
    assert_invalid(config.validate(), "must be greater than zero")
}

#[test]
fn non_finite_tolerance_is_rejected() -> TestResult {
    for tolerance in [f64::NAN, f64::INFINITY] {
        let mut config = minimal_config().map_err(|err| err.to_string())?;
        config.comparison.default_tolerance = tolerance;
        assert_invalid(config.validate(), "must be finite")?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Messages
// ============================================================================

#[test]
fn rendered_chars_bounds_are_inclusive() -> TestResult {
    for chars in [MIN_RENDERED_CHARS, MAX_RENDERED_CHARS] {
        let mut config = minimal_config().map_err(|err| err.to_string())?;
        config.messages.max_rendered_chars = chars;
        config.validate().map_err(|err| err.to_string())?;
    }
    Ok(())
}

#[test]
fn rendered_chars_outside_bounds_are_rejected() -> TestResult {
    for chars in [MIN_RENDERED_CHARS - 1, MAX_RENDERED_CHARS + 1] {
        let mut config = minimal_config().map_err(|err| err.to_string())?;
        config.messages.max_rendered_chars = chars;
        assert_invalid(config.validate(), "messages.max_rendered_chars")?;
    }
    Ok(())
}

#[test]
fn rendered_items_outside_bounds_are_rejected() -> TestResult {
    for items in [MIN_RENDERED_ITEMS - 1, MAX_RENDERED_ITEMS + 1] {
        let mut config = minimal_config().map_err(|err| err.to_string())?;
        config.messages.max_rendered_items = items;
        assert_invalid(config.validate(), "messages.max_rendered_items")?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Strictness
// ============================================================================

#[test]
fn unknown_section_is_rejected() -> TestResult {
    assert_invalid(GuardrailConfig::from_toml_str("[metrics]\nenabled = true\n"), "parse error")
}

#[test]
fn unknown_field_is_rejected() -> TestResult {
    assert_invalid(
        GuardrailConfig::from_toml_str("[comparison]\ntolerance = 0.1\n"),
        "parse error",
    )
}

#[test]
fn unknown_observer_mode_is_rejected() -> TestResult {
    assert_invalid(GuardrailConfig::from_toml_str("[observer]\nmode = \"stdout\"\n"), "parse error")
}

#[test]
fn from_toml_str_validates_after_parsing() -> TestResult {
    match GuardrailConfig::from_toml_str("[messages]\nmax_rendered_items = 0\n") {
        Err(ConfigError::Invalid(_)) => Ok(()),
        Err(other) => Err(format!("expected invalid error, got {other}")),
        Ok(_) => Err("expected validation failure".to_string()),
    }
}
