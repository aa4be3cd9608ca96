// crates/guardrail-core/src/value.rs
// ============================================================================
// Module: Value Guards
// Description: Null, default, equality, identity, and allow-list checks.
// Purpose: Cover the guards that apply to any value regardless of its shape.
// Dependencies: crate::{error, throw}
// ============================================================================

//! ## Overview
//! [`ValueGuards`] is implemented for every sized `Debug` type and
//! [`OptionGuards`] for `Option<T>`. Absence is modelled with `Option`, so
//! `must_not_be_none` is the null check: it unwraps the value or fails with
//! `ArgumentNull`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Debug;
use std::ptr;

use crate::error::GuardResult;
use crate::throw;

// ============================================================================
// SECTION: Value Guards
// ============================================================================

/// Equality, default, identity, and allow-list checks for any value.
pub trait ValueGuards: Debug + Sized {
    /// Returns `self` when it equals `other`.
    ///
    /// # Errors
    ///
    /// Returns `ValuesNotEqual` otherwise.
    fn must_be(self, other: &Self, parameter: &str) -> GuardResult<Self>
    where
        Self: PartialEq,
    {
        if self == *other {
            Ok(self)
        } else {
            Err(throw::values_not_equal(&self, other, parameter))
        }
    }

    /// Returns `self` when it differs from `other`.
    ///
    /// # Errors
    ///
    /// Returns `ValuesEqual` otherwise.
    fn must_not_be(self, other: &Self, parameter: &str) -> GuardResult<Self>
    where
        Self: PartialEq,
    {
        if self == *other { Err(throw::values_equal(other, parameter)) } else { Ok(self) }
    }

    /// Returns true when `self` equals the type's default.
    fn is_default(&self) -> bool
    where
        Self: Default + PartialEq,
    {
        *self == Self::default()
    }

    /// Returns `self` when it differs from the type's default.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentDefault` otherwise.
    fn must_not_be_default(self, parameter: &str) -> GuardResult<Self>
    where
        Self: Default + PartialEq,
    {
        if self.is_default() { Err(throw::argument_default(parameter)) } else { Ok(self) }
    }

    /// Returns true when `self` and `other` are the same instance.
    ///
    /// Called on a reference, this compares the referenced instances.
    fn is_same_as(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }

    /// Returns `self` when it is a different instance than `other`.
    ///
    /// # Errors
    ///
    /// Returns `SameReference` otherwise.
    fn must_not_be_same_as<'a>(&'a self, other: &Self, parameter: &str) -> GuardResult<&'a Self> {
        if self.is_same_as(other) { Err(throw::same_reference(parameter)) } else { Ok(self) }
    }

    /// Returns true when `self` equals one of `items`.
    fn is_one_of(&self, items: &[Self]) -> bool
    where
        Self: PartialEq,
    {
        items.contains(self)
    }

    /// Returns `self` when it equals one of `items`.
    ///
    /// # Errors
    ///
    /// Returns `MissingItem` otherwise.
    fn must_be_one_of(self, items: &[Self], parameter: &str) -> GuardResult<Self>
    where
        Self: PartialEq,
    {
        if self.is_one_of(items) {
            Ok(self)
        } else {
            Err(throw::not_one_of(&self, items, parameter))
        }
    }

    /// Returns `self` when it equals none of `items`.
    ///
    /// # Errors
    ///
    /// Returns `ExistingItem` otherwise.
    fn must_not_be_one_of(self, items: &[Self], parameter: &str) -> GuardResult<Self>
    where
        Self: PartialEq,
    {
        if self.is_one_of(items) { Err(throw::one_of(&self, items, parameter)) } else { Ok(self) }
    }
}

impl<T: Debug> ValueGuards for T {}

// ============================================================================
// SECTION: Option Guards
// ============================================================================

/// Presence checks for optional values.
pub trait OptionGuards<T> {
    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentNull` when the value is absent.
    fn must_not_be_none(self, parameter: &str) -> GuardResult<T>;

    /// Succeeds when the value is absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when a value is present.
    fn must_be_none(self, parameter: &str) -> GuardResult
    where
        T: Debug;
}

impl<T> OptionGuards<T> for Option<T> {
    fn must_not_be_none(self, parameter: &str) -> GuardResult<T> {
        self.ok_or_else(|| throw::argument_null(parameter))
    }

    fn must_be_none(self, parameter: &str) -> GuardResult
    where
        T: Debug,
    {
        match self {
            None => Ok(()),
            Some(value) => Err(throw::must_be_none(&value, parameter)),
        }
    }
}
