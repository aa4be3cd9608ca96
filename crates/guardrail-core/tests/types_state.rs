// crates/guardrail-core/tests/types_state.rs
// ============================================================================
// Module: Type, State, and Macro Tests
// Description: Runtime type checks, condition-based state guards, and macros.
// Purpose: Ensure the non-value guard families report the right kinds.
// Dependencies: guardrail_core::{types, state, debug_guard, guard_argument}
// ============================================================================
//! ## Overview
//! Integration tests for [`guardrail_core::types`], [`guardrail_core::state`],
//! and the exported guard macros.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::float_cmp,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use std::any::Any;

use guardrail_core::ComparableGuards;
use guardrail_core::GuardError;
use guardrail_core::GuardErrorKind;
use guardrail_core::GuardResult;
use guardrail_core::debug_guard;
use guardrail_core::guard_argument;
use guardrail_core::state;
use guardrail_core::types;
use support::TestResult;
use support::ensure;
use support::ensure_violation;
use support::violation_message;

// ============================================================================
// SECTION: Types
// ============================================================================

#[test]
fn type_identity() -> TestResult {
    ensure(types::is_same_type::<u8, u8>(), "u8 is u8")?;
    ensure(!types::is_same_type::<u8, i8>(), "u8 is not i8")?;
    ensure(types::is_same_type::<str, str>(), "unsized types compare too")?;
    let value: &dyn Any = &42_u32;
    ensure(types::is_type_of::<u32>(value), "value is u32")?;
    ensure(!types::is_type_of::<u64>(value), "value is not u64")?;
    Ok(())
}

#[test]
fn downcasts_return_the_typed_value() -> TestResult {
    let value: &dyn Any = &String::from("text");
    ensure(types::must_be_of_type::<String>(value, "input")? == "text", "downcast works")?;
    ensure_violation(types::must_be_of_type::<u8>(value, "input"), GuardErrorKind::TypeCast)?;
    let boxed: Box<dyn Any> = Box::new(7_i16);
    ensure(*types::must_be_boxed_of_type::<i16>(boxed, "input")? == 7, "boxed downcast works")?;
    let message = violation_message(types::must_be_boxed_of_type::<u8>(Box::new(1_i16), "input"))?;
    ensure(
        message == "input must be of type u8, but it actually is not.",
        format!("unexpected message: {message}"),
    )
}

// ============================================================================
// SECTION: State
// ============================================================================

#[test]
fn state_guards_fail_when_condition_holds() -> TestResult {
    state::invalid_argument(false, "mode", "unused")?;
    ensure_violation(
        state::invalid_argument(true, "mode", "bad mode"),
        GuardErrorKind::InvalidArgument,
    )?;
    state::invalid_state(false, "")?;
    ensure_violation(state::invalid_state(true, ""), GuardErrorKind::InvalidState)?;
    state::invalid_operation(false, "")?;
    ensure_violation(state::invalid_operation(true, "closed"), GuardErrorKind::InvalidOperation)?;
    Ok(())
}

#[test]
fn state_guards_fall_back_to_default_messages() -> TestResult {
    let message = violation_message(state::invalid_state(true, ""))?;
    ensure(message == "The object is in an invalid state.", format!("unexpected: {message}"))?;
    let message = violation_message(state::invalid_operation(true, ""))?;
    ensure(
        message == "The operation is not valid at this time.",
        format!("unexpected: {message}"),
    )?;
    let message = violation_message(state::invalid_argument(true, "mode", ""))?;
    ensure(message == "mode is invalid.", format!("unexpected: {message}"))?;
    let message = violation_message(state::invalid_operation(true, "stream closed"))?;
    ensure(message == "stream closed", format!("unexpected: {message}"))
}

// ============================================================================
// SECTION: Macros
// ============================================================================

/// Custom error used to check that macros convert through `From`.
#[derive(Debug)]
struct AppError(GuardError);

impl From<GuardError> for AppError {
    fn from(error: GuardError) -> Self {
        Self(error)
    }
}

fn window(start: u32, end: u32) -> Result<u32, AppError> {
    guard_argument!(end < start, "end", "end {end} precedes start {start}");
    Ok(end - start)
}

fn checked_ratio(ratio: f64) -> GuardResult<f64> {
    debug_guard!(ratio.must_not_be_greater_than(1.0, "ratio"));
    Ok(ratio)
}

#[test]
fn guard_argument_formats_and_converts() -> TestResult {
    ensure(matches!(window(2, 5), Ok(3)), "ordered window passes")?;
    match window(5, 2) {
        Err(AppError(error)) => {
            ensure(error.kind() == GuardErrorKind::InvalidArgument, "kind is InvalidArgument")?;
            ensure(error.parameter() == Some("end"), "parameter is recorded")?;
            ensure(error.message() == "end 2 precedes start 5", "message is formatted")
        }
        Ok(_) => ensure(false, "reversed window must fail"),
    }
}

#[test]
fn debug_guard_checks_in_debug_builds() -> TestResult {
    ensure(checked_ratio(0.5)? == 0.5, "in-range ratio passes")?;
    ensure(checked_ratio(2.0).is_err() == cfg!(debug_assertions), "only debug builds check")
}
