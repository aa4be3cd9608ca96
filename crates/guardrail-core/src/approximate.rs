// crates/guardrail-core/src/approximate.rs
// ============================================================================
// Module: Approximate Equality
// Description: Tolerance-based comparisons for floating-point values.
// Purpose: Compare `f32`/`f64` values without exact-equality pitfalls.
// Dependencies: crate::{error, settings, throw}
// ============================================================================

//! ## Overview
//! Two floats are approximately equal when their absolute difference is
//! strictly less than the tolerance. NaN is never approximately equal to
//! anything, including itself. The `_default` variants use the tolerance from
//! the installed settings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Debug;

use crate::error::GuardResult;
use crate::settings::settings;
use crate::throw;

// ============================================================================
// SECTION: Approximate Guards
// ============================================================================

/// Tolerance-based comparisons for floating-point values.
pub trait ApproximateGuards: Copy + PartialOrd + Debug {
    /// Returns the absolute difference between `self` and `other`.
    fn abs_difference(self, other: Self) -> Self;

    /// Returns the default tolerance converted to `Self`.
    fn default_tolerance() -> Self;

    /// Returns true when `self` and `other` differ by less than `tolerance`.
    fn is_approximately(self, other: Self, tolerance: Self) -> bool {
        self.abs_difference(other) < tolerance
    }

    /// Returns true when `self` and `other` differ by less than the default
    /// tolerance.
    fn is_approximately_default(self, other: Self) -> bool {
        self.is_approximately(other, Self::default_tolerance())
    }

    /// Returns true when `self` is greater than `other` or approximately equal
    /// to it.
    fn is_greater_than_or_approximately(self, other: Self, tolerance: Self) -> bool {
        self > other || self.is_approximately(other, tolerance)
    }

    /// Returns true when `self` is less than `other` or approximately equal to
    /// it.
    fn is_less_than_or_approximately(self, other: Self, tolerance: Self) -> bool {
        self < other || self.is_approximately(other, tolerance)
    }

    /// Returns `self` when it is approximately equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` otherwise.
    fn must_be_approximately(
        self,
        other: Self,
        tolerance: Self,
        parameter: &str,
    ) -> GuardResult<Self> {
        if self.is_approximately(other, tolerance) {
            Ok(self)
        } else {
            Err(throw::must_be_approximately(&self, &other, &tolerance, parameter))
        }
    }

    /// Returns `self` when it is not approximately equal to `other`.
    ///
    /// # Errors
    ///
    /// Returns `ValuesEqual` otherwise.
    fn must_not_be_approximately(
        self,
        other: Self,
        tolerance: Self,
        parameter: &str,
    ) -> GuardResult<Self> {
        if self.is_approximately(other, tolerance) {
            Err(throw::must_not_be_approximately(&self, &other, &tolerance, parameter))
        } else {
            Ok(self)
        }
    }
}

impl ApproximateGuards for f64 {
    fn abs_difference(self, other: Self) -> Self {
        (self - other).abs()
    }

    fn default_tolerance() -> Self {
        settings().default_tolerance
    }
}

impl ApproximateGuards for f32 {
    fn abs_difference(self, other: Self) -> Self {
        (self - other).abs()
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "Tolerances are small positive values well inside f32 range."
    )]
    fn default_tolerance() -> Self {
        settings().default_tolerance as Self
    }
}
