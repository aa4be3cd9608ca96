// crates/guardrail-core/src/comparable.rs
// ============================================================================
// Module: Comparable Guards
// Description: Bound and range checks for partially ordered values.
// Purpose: Provide `must_be_greater_than` style assertions for any ordered type.
// Dependencies: crate::{error, range, throw}
// ============================================================================

//! ## Overview
//! [`ComparableGuards`] is implemented for every `PartialOrd + Debug` type.
//! Comparisons go through `partial_cmp`, and an incomparable pair (NaN
//! against anything) is treated as a violation: a value that cannot be
//! ordered never satisfies a bound.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::GuardResult;
use crate::range::Range;
use crate::throw;

// ============================================================================
// SECTION: Comparable Guards
// ============================================================================

/// Bound and range checks for partially ordered values.
pub trait ComparableGuards: PartialOrd + Debug + Sized {
    /// Returns `self` when it is greater than `bound`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` otherwise.
    fn must_be_greater_than(self, bound: Self, parameter: &str) -> GuardResult<Self> {
        if matches!(self.partial_cmp(&bound), Some(Ordering::Greater)) {
            Ok(self)
        } else {
            Err(throw::must_be_greater_than(&self, &bound, parameter))
        }
    }

    /// Returns `self` when it is greater than or equal to `bound`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` otherwise.
    fn must_be_greater_than_or_equal_to(self, bound: Self, parameter: &str) -> GuardResult<Self> {
        if matches!(self.partial_cmp(&bound), Some(Ordering::Greater | Ordering::Equal)) {
            Ok(self)
        } else {
            Err(throw::must_be_greater_than_or_equal_to(&self, &bound, parameter))
        }
    }

    /// Returns `self` when it is less than `bound`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` otherwise.
    fn must_be_less_than(self, bound: Self, parameter: &str) -> GuardResult<Self> {
        if matches!(self.partial_cmp(&bound), Some(Ordering::Less)) {
            Ok(self)
        } else {
            Err(throw::must_be_less_than(&self, &bound, parameter))
        }
    }

    /// Returns `self` when it is less than or equal to `bound`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` otherwise.
    fn must_be_less_than_or_equal_to(self, bound: Self, parameter: &str) -> GuardResult<Self> {
        if matches!(self.partial_cmp(&bound), Some(Ordering::Less | Ordering::Equal)) {
            Ok(self)
        } else {
            Err(throw::must_be_less_than_or_equal_to(&self, &bound, parameter))
        }
    }

    /// Returns `self` unless it is greater than `bound`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` when `self` is greater or incomparable.
    fn must_not_be_greater_than(self, bound: Self, parameter: &str) -> GuardResult<Self> {
        if matches!(self.partial_cmp(&bound), Some(Ordering::Less | Ordering::Equal)) {
            Ok(self)
        } else {
            Err(throw::must_not_be_greater_than(&self, &bound, parameter))
        }
    }

    /// Returns `self` unless it is less than `bound`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` when `self` is less or incomparable.
    fn must_not_be_less_than(self, bound: Self, parameter: &str) -> GuardResult<Self> {
        if matches!(self.partial_cmp(&bound), Some(Ordering::Greater | Ordering::Equal)) {
            Ok(self)
        } else {
            Err(throw::must_not_be_less_than(&self, &bound, parameter))
        }
    }

    /// Returns true when `self` lies within `range`.
    fn is_in(&self, range: &Range<Self>) -> bool {
        range.is_value_within_range(self)
    }

    /// Returns true when `self` lies outside `range`.
    ///
    /// Incomparable values are outside every range.
    fn is_not_in(&self, range: &Range<Self>) -> bool {
        !range.is_value_within_range(self)
    }

    /// Returns `self` when it lies within `range`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` otherwise.
    fn must_be_in(self, range: &Range<Self>, parameter: &str) -> GuardResult<Self> {
        if range.is_value_within_range(&self) {
            Ok(self)
        } else {
            Err(throw::must_be_in(&self, range, parameter))
        }
    }

    /// Returns `self` when it lies outside `range`.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` otherwise.
    fn must_not_be_in(self, range: &Range<Self>, parameter: &str) -> GuardResult<Self> {
        if range.is_value_within_range(&self) {
            Err(throw::must_not_be_in(&self, range, parameter))
        } else {
            Ok(self)
        }
    }

    /// Returns `self` when it is greater than the type's default (zero for
    /// numbers).
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` otherwise.
    fn must_be_positive(self, parameter: &str) -> GuardResult<Self>
    where
        Self: Default,
    {
        if matches!(self.partial_cmp(&Self::default()), Some(Ordering::Greater)) {
            Ok(self)
        } else {
            Err(throw::must_be_positive(&self, parameter))
        }
    }

    /// Returns `self` when it is not less than the type's default (zero for
    /// numbers).
    ///
    /// # Errors
    ///
    /// Returns `ArgumentOutOfRange` otherwise.
    fn must_not_be_negative(self, parameter: &str) -> GuardResult<Self>
    where
        Self: Default,
    {
        if matches!(self.partial_cmp(&Self::default()), Some(Ordering::Greater | Ordering::Equal)) {
            Ok(self)
        } else {
            Err(throw::must_not_be_negative(&self, parameter))
        }
    }
}

impl<T: PartialOrd + Debug> ComparableGuards for T {}
