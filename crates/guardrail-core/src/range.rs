// crates/guardrail-core/src/range.rs
// ============================================================================
// Module: Comparable Ranges
// Description: Bounded ranges with explicit inclusive/exclusive ends.
// Purpose: Describe the accepted interval for `must_be_in` style checks.
// Dependencies: crate::{error, render, throw}, serde
// ============================================================================

//! ## Overview
//! A [`Range`] is built fluently from its lower bound:
//! `Range::from_inclusive(0).to_exclusive(10)`. Construction rejects ranges
//! whose upper bound lies below the lower bound. Standard library ranges
//! convert through `TryFrom` and deserialized ranges pass the same check, so
//! only direct field mutation can produce a reversed range.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Debug;
use std::ops;

use serde::Deserialize;
use serde::Serialize;

use crate::error::GuardError;
use crate::error::GuardResult;
use crate::render;
use crate::throw;

// ============================================================================
// SECTION: Range
// ============================================================================

/// Interval between two comparable bounds.
///
/// # Invariants
/// - `from <= to` for ranges built via [`RangeFromInfo`], [`Range::in_between`],
///   `TryFrom`, or deserialization. Writing the public fields bypasses the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawRange<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialOrd + Debug")
)]
pub struct Range<T> {
    /// Lower bound.
    pub from: T,
    /// Upper bound.
    pub to: T,
    /// Whether `from` itself is part of the range.
    pub is_from_inclusive: bool,
    /// Whether `to` itself is part of the range.
    pub is_to_inclusive: bool,
}

/// Lower half of a range under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a range is only built once an upper bound is supplied"]
pub struct RangeFromInfo<T> {
    /// Lower bound.
    from: T,
    /// Whether `from` itself is part of the range.
    is_from_inclusive: bool,
}

impl<T> Range<T> {
    /// Starts a range whose lower bound is included.
    pub const fn from_inclusive(from: T) -> RangeFromInfo<T> {
        RangeFromInfo {
            from,
            is_from_inclusive: true,
        }
    }

    /// Starts a range whose lower bound is excluded.
    pub const fn from_exclusive(from: T) -> RangeFromInfo<T> {
        RangeFromInfo {
            from,
            is_from_inclusive: false,
        }
    }
}

impl<T: PartialOrd + Debug> Range<T> {
    /// Builds a range including both bounds.
    ///
    /// # Errors
    ///
    /// Returns an `ArgumentOutOfRange` error when `to` is less than `from`.
    pub fn in_between(from: T, to: T) -> GuardResult<Self> {
        Self::from_inclusive(from).to_inclusive(to)
    }

    /// Returns true when `value` lies within the range.
    ///
    /// Incomparable values (such as NaN) are never within a range.
    #[must_use]
    pub fn is_value_within_range(&self, value: &T) -> bool {
        let lower = match value.partial_cmp(&self.from) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.is_from_inclusive,
            Some(Ordering::Less) | None => false,
        };
        let upper = match value.partial_cmp(&self.to) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.is_to_inclusive,
            Some(Ordering::Greater) | None => false,
        };
        lower && upper
    }
}

impl<T: Debug> Range<T> {
    /// Renders the range for diagnostic messages.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "between {} ({}) and {} ({})",
            render::value(&self.from),
            inclusivity(self.is_from_inclusive),
            render::value(&self.to),
            inclusivity(self.is_to_inclusive),
        )
    }
}

impl<T: PartialOrd + Debug> RangeFromInfo<T> {
    /// Completes the range with an included upper bound.
    ///
    /// # Errors
    ///
    /// Returns an `ArgumentOutOfRange` error when `to` is less than the lower
    /// bound or the bounds are incomparable.
    pub fn to_inclusive(self, to: T) -> GuardResult<Range<T>> {
        self.build(to, true)
    }

    /// Completes the range with an excluded upper bound.
    ///
    /// # Errors
    ///
    /// Returns an `ArgumentOutOfRange` error when `to` is less than the lower
    /// bound or the bounds are incomparable.
    pub fn to_exclusive(self, to: T) -> GuardResult<Range<T>> {
        self.build(to, false)
    }

    /// Validates the bounds and assembles the range.
    fn build(self, to: T, is_to_inclusive: bool) -> GuardResult<Range<T>> {
        match to.partial_cmp(&self.from) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(Range {
                from: self.from,
                to,
                is_from_inclusive: self.is_from_inclusive,
                is_to_inclusive,
            }),
            Some(Ordering::Less) | None => {
                Err(throw::must_be_greater_than_or_equal_to(&to, &self.from, "to"))
            }
        }
    }
}

/// Unchecked wire form of a [`Range`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRange<T> {
    /// Lower bound.
    from: T,
    /// Upper bound.
    to: T,
    /// Whether `from` itself is part of the range.
    is_from_inclusive: bool,
    /// Whether `to` itself is part of the range.
    is_to_inclusive: bool,
}

/// Labels a bound for messages.
const fn inclusivity(inclusive: bool) -> &'static str {
    if inclusive { "inclusive" } else { "exclusive" }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl<T: PartialOrd + Debug> TryFrom<ops::Range<T>> for Range<T> {
    type Error = GuardError;

    fn try_from(range: ops::Range<T>) -> GuardResult<Self> {
        Self::from_inclusive(range.start).to_exclusive(range.end)
    }
}

impl<T: PartialOrd + Debug> TryFrom<ops::RangeInclusive<T>> for Range<T> {
    type Error = GuardError;

    fn try_from(range: ops::RangeInclusive<T>) -> GuardResult<Self> {
        let (from, to) = range.into_inner();
        Self::in_between(from, to)
    }
}

impl<T: PartialOrd + Debug> TryFrom<RawRange<T>> for Range<T> {
    type Error = GuardError;

    fn try_from(raw: RawRange<T>) -> GuardResult<Self> {
        let start = RangeFromInfo {
            from: raw.from,
            is_from_inclusive: raw.is_from_inclusive,
        };
        start.build(raw.to, raw.is_to_inclusive)
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "between {} ({}) and {} ({})",
            self.from,
            inclusivity(self.is_from_inclusive),
            self.to,
            inclusivity(self.is_to_inclusive)
        )
    }
}
