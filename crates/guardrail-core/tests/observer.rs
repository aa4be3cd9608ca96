// crates/guardrail-core/tests/observer.rs
// ============================================================================
// Module: Violation Observer Tests
// Description: Install a recording observer and verify violation reports.
// Purpose: Ensure every default error is reported once and passes are silent.
// Dependencies: guardrail_core::observer
// ============================================================================
//! ## Overview
//! The observer is installed process-wide, so this suite runs as its own test
//! binary and keeps every assertion in a single test.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use std::sync::Arc;
use std::sync::Mutex;

use guardrail_core::ComparableGuards;
use guardrail_core::GuardError;
use guardrail_core::GuardErrorKind;
use guardrail_core::GuardObserver;
use guardrail_core::GuardResultExt;
use guardrail_core::InstallError;
use guardrail_core::NoopObserver;
use guardrail_core::StringGuards;
use guardrail_core::install_observer;
use support::TestResult;
use support::ensure;

/// Observer that records the kind and parameter of every violation.
#[derive(Clone, Default)]
struct RecordingObserver {
    /// Recorded violations in arrival order.
    seen: Arc<Mutex<Vec<(GuardErrorKind, Option<String>)>>>,
}

impl RecordingObserver {
    /// Returns a snapshot of the recorded violations.
    fn snapshot(&self) -> Vec<(GuardErrorKind, Option<String>)> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

impl GuardObserver for RecordingObserver {
    fn on_violation(&self, error: &GuardError) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push((error.kind(), error.parameter().map(ToString::to_string)));
        }
    }
}

#[test]
fn violations_are_reported_once() -> TestResult {
    let recorder = RecordingObserver::default();
    install_observer(Box::new(recorder.clone()))?;
    ensure(
        install_observer(Box::new(NoopObserver)) == Err(InstallError::ObserverAlreadyInstalled),
        "a second observer must be rejected",
    )?;

    5_i32.must_be_less_than(10, "limit")?;
    "ok".must_not_be_empty("name")?;
    ensure(recorder.snapshot().is_empty(), "passing guards must not report")?;

    let _ = 50_i32.must_be_less_than(10, "limit");
    let _ = "".must_not_be_empty("").with_message("custom");
    let _ = "".must_not_be_white_space("title");

    let seen = recorder.snapshot();
    let expected = vec![
        (GuardErrorKind::ArgumentOutOfRange, Some("limit".to_string())),
        (GuardErrorKind::EmptyString, None),
        (GuardErrorKind::EmptyString, Some("title".to_string())),
    ];
    ensure(seen == expected, format!("unexpected reports: {seen:?}"))
}
