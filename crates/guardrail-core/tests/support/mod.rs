// crates/guardrail-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers for guard integration tests.
// ============================================================================
//! ## Overview
//! Shared test helpers for consistent Result-based assertions.

#![allow(
    dead_code,
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only helpers are selectively used across suites."
)]

use std::error::Error;
use std::fmt;

use guardrail_core::GuardErrorKind;
use guardrail_core::GuardResult;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across guard integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

/// Returns an error unless the guard failed with `kind`.
///
/// # Errors
/// Returns a `TestError` when the guard passed or failed with another kind.
pub fn ensure_violation<T>(result: GuardResult<T>, kind: GuardErrorKind) -> TestResult {
    match result {
        Err(error) if error.kind() == kind => Ok(()),
        Err(error) => Err(Box::new(TestError::new(format!(
            "expected {} but got {}: {}",
            kind.as_str(),
            error.kind().as_str(),
            error.message()
        )))),
        Ok(_) => Err(Box::new(TestError::new(format!("expected {} violation", kind.as_str())))),
    }
}

/// Returns the violation message, or an error when the guard passed.
///
/// # Errors
/// Returns a `TestError` when the guard passed.
pub fn violation_message<T>(result: GuardResult<T>) -> TestResult<String> {
    match result {
        Err(error) => Ok(error.message().to_string()),
        Ok(_) => Err(Box::new(TestError::new("expected a violation"))),
    }
}
