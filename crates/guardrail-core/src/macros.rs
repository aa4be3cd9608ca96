// crates/guardrail-core/src/macros.rs
// ============================================================================
// Module: Guard Macros
// Description: Debug-only guards and formatted argument checks.
// Purpose: Let callers compile guards away in release builds.
// Dependencies: crate::state
// ============================================================================

//! ## Overview
//! `debug_guard!` evaluates a guard only when `debug_assertions` is enabled
//! for the *calling* crate, so release builds skip both the check and the
//! evaluation of its operands.

/// Evaluates a guard and propagates its error with `?`, in debug builds only.
///
/// ```ignore
/// fn set_ratio(ratio: f64) -> GuardResult<()> {
///     debug_guard!(ratio.must_be_in(&unit, "ratio"));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! debug_guard {
    ($guard:expr $(,)?) => {
        if cfg!(debug_assertions) {
            let _ = $guard?;
        }
    };
}

/// Fails with `InvalidArgument` and a formatted message when the condition
/// holds, propagating the error with `?`.
///
/// ```ignore
/// guard_argument!(end < start, "end", "end {end} precedes start {start}");
/// ```
#[macro_export]
macro_rules! guard_argument {
    ($condition:expr, $parameter:expr, $($message:tt)+) => {
        if $condition {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::throw::invalid_argument($parameter, &::std::format!($($message)+)),
            ));
        }
    };
}
