// crates/guardrail-core/src/state.rs
// ============================================================================
// Module: State Checks
// Description: Condition-driven argument, state, and operation checks.
// Purpose: Fail when a caller-computed condition marks the call as invalid.
// Dependencies: crate::{error, throw}
// ============================================================================

//! ## Overview
//! These checks take the *violation* condition: they fail when `condition`
//! is true. An empty message selects the default text.

use crate::error::GuardResult;
use crate::throw;

/// Fails with `InvalidArgument` when `condition` is true.
///
/// # Errors
///
/// Returns `InvalidArgument` carrying `parameter` and `message`.
pub fn invalid_argument(condition: bool, parameter: &str, message: &str) -> GuardResult {
    if condition { Err(throw::invalid_argument(parameter, message)) } else { Ok(()) }
}

/// Fails with `InvalidState` when `condition` is true.
///
/// # Errors
///
/// Returns `InvalidState` carrying `message`.
pub fn invalid_state(condition: bool, message: &str) -> GuardResult {
    if condition { Err(throw::invalid_state(message)) } else { Ok(()) }
}

/// Fails with `InvalidOperation` when `condition` is true.
///
/// # Errors
///
/// Returns `InvalidOperation` carrying `message`.
pub fn invalid_operation(condition: bool, message: &str) -> GuardResult {
    if condition { Err(throw::invalid_operation(message)) } else { Ok(()) }
}
