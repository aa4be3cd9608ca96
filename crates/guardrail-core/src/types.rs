// crates/guardrail-core/src/types.rs
// ============================================================================
// Module: Type Guards
// Description: Type identity and downcast checks for `Any` values.
// Purpose: Validate dynamically typed arguments before they are used.
// Dependencies: crate::{error, throw}
// ============================================================================

//! ## Overview
//! Type checks are built on `TypeId`: two types are the same when their ids
//! match, and a `dyn Any` value is of type `T` when it downcasts to `T`.
//! Relationships that need runtime reflection (inheritance chains, generic
//! definition equivalence) are out of scope.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any::Any;
use std::any::TypeId;
use std::any::type_name;

use crate::error::GuardResult;
use crate::throw;

// ============================================================================
// SECTION: Type Checks
// ============================================================================

/// Returns true when `A` and `B` are the same type.
#[must_use]
pub fn is_same_type<A: ?Sized + 'static, B: ?Sized + 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Returns true when `value` is of type `T`.
#[must_use]
pub fn is_type_of<T: Any>(value: &dyn Any) -> bool {
    value.is::<T>()
}

/// Returns `value` viewed as `T`.
///
/// # Errors
///
/// Returns `TypeCast` when `value` is not of type `T`.
pub fn must_be_of_type<'a, T: Any>(value: &'a dyn Any, parameter: &str) -> GuardResult<&'a T> {
    value.downcast_ref::<T>().ok_or_else(|| throw::type_cast(type_name::<T>(), parameter))
}

/// Returns the boxed `value` as a `Box<T>`.
///
/// # Errors
///
/// Returns `TypeCast` when `value` is not of type `T`.
pub fn must_be_boxed_of_type<T: Any>(value: Box<dyn Any>, parameter: &str) -> GuardResult<Box<T>> {
    value.downcast::<T>().map_err(|_| throw::type_cast(type_name::<T>(), parameter))
}
