// crates/guardrail-core/src/collection.rs
// ============================================================================
// Module: Collection Guards
// Description: Emptiness, count, membership, subset, uniqueness, and sequence
//              checks for slices.
// Purpose: Validate collection arguments without copying them.
// Dependencies: crate::{error, throw}
// ============================================================================

//! ## Overview
//! [`CollectionGuards`] is implemented for `[T]`, so vectors, arrays, and
//! slices all share it. Subset and superset relations ignore multiplicity:
//! `[1, 1]` is a subset of `[1]`. Uniqueness needs `Eq + Hash` and reports
//! the first repeated item.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::GuardResult;
use crate::throw;

// ============================================================================
// SECTION: Collection Guards
// ============================================================================

/// Checks for slices of comparable items.
pub trait CollectionGuards<T: PartialEq + Debug> {
    /// Returns the checked items; backs the provided methods.
    #[doc(hidden)]
    fn as_items(&self) -> &[T];

    /// Returns the items when there is at least one.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` otherwise.
    fn must_not_be_empty(&self, parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if items.is_empty() { Err(throw::empty_collection(parameter)) } else { Ok(items) }
    }

    // ------------------------------------------------------------------------
    // Counts
    // ------------------------------------------------------------------------

    /// Returns the items when there are exactly `count` of them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCollectionCount` otherwise.
    fn must_have_count(&self, count: usize, parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if items.len() == count {
            Ok(items)
        } else {
            Err(throw::invalid_collection_count(items, "exactly", count, parameter))
        }
    }

    /// Returns the items when there are at least `count` of them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCollectionCount` otherwise.
    fn must_have_min_count(&self, count: usize, parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if items.len() >= count {
            Ok(items)
        } else {
            Err(throw::invalid_collection_count(items, "at least", count, parameter))
        }
    }

    /// Returns the items when there are at most `count` of them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCollectionCount` otherwise.
    fn must_have_max_count(&self, count: usize, parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if items.len() <= count {
            Ok(items)
        } else {
            Err(throw::invalid_collection_count(items, "at most", count, parameter))
        }
    }

    // ------------------------------------------------------------------------
    // Membership
    // ------------------------------------------------------------------------

    /// Returns the items when `item` is among them.
    ///
    /// # Errors
    ///
    /// Returns `MissingItem` otherwise.
    fn must_contain(&self, item: &T, parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if items.contains(item) {
            Ok(items)
        } else {
            Err(throw::missing_item(items, item, parameter))
        }
    }

    /// Returns the items when `item` is not among them.
    ///
    /// # Errors
    ///
    /// Returns `ExistingItem` otherwise.
    fn must_not_contain(&self, item: &T, parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if items.contains(item) {
            Err(throw::existing_item(items, item, parameter))
        } else {
            Ok(items)
        }
    }

    // ------------------------------------------------------------------------
    // Subsets
    // ------------------------------------------------------------------------

    /// Returns true when every item also occurs in `superset`.
    fn is_subset_of(&self, superset: &[T]) -> bool {
        self.as_items().iter().all(|item| superset.contains(item))
    }

    /// Returns true when every item of `subset` also occurs in the items.
    fn is_superset_of(&self, subset: &[T]) -> bool {
        let items = self.as_items();
        subset.iter().all(|item| items.contains(item))
    }

    /// Returns the items when every one of them occurs in `superset`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCollection` otherwise.
    fn must_be_subset_of(&self, superset: &[T], parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if self.is_subset_of(superset) {
            Ok(items)
        } else {
            Err(throw::not_subset(items, superset, parameter))
        }
    }

    /// Returns the items when every item of `subset` occurs among them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCollection` otherwise.
    fn must_be_superset_of(&self, subset: &[T], parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if self.is_superset_of(subset) {
            Ok(items)
        } else {
            Err(throw::not_superset(items, subset, parameter))
        }
    }

    // ------------------------------------------------------------------------
    // Uniqueness
    // ------------------------------------------------------------------------

    /// Returns true when no item occurs more than once.
    fn has_unique_items(&self) -> bool
    where
        T: Eq + Hash,
    {
        first_duplicate(self.as_items()).is_none()
    }

    /// Returns the items when no item occurs more than once.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCollection` naming the first repeated item otherwise.
    fn must_have_unique_items(&self, parameter: &str) -> GuardResult<&[T]>
    where
        T: Eq + Hash,
    {
        let items = self.as_items();
        match first_duplicate(items) {
            None => Ok(items),
            Some(duplicate) => Err(throw::duplicate_item(items, duplicate, parameter)),
        }
    }

    // ------------------------------------------------------------------------
    // Sequences
    // ------------------------------------------------------------------------

    /// Returns the items when they begin with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCollection` otherwise.
    fn must_start_with_items(&self, prefix: &[T], parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if items.starts_with(prefix) {
            Ok(items)
        } else {
            Err(throw::not_starting_with(items, prefix, parameter))
        }
    }

    /// Returns the items when they end with `suffix`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCollection` otherwise.
    fn must_end_with_items(&self, suffix: &[T], parameter: &str) -> GuardResult<&[T]> {
        let items = self.as_items();
        if items.ends_with(suffix) {
            Ok(items)
        } else {
            Err(throw::not_ending_with(items, suffix, parameter))
        }
    }
}

impl<T: PartialEq + Debug> CollectionGuards<T> for [T] {
    fn as_items(&self) -> &[T] {
        self
    }
}

/// Returns the first item seen a second time.
fn first_duplicate<T: Eq + Hash>(items: &[T]) -> Option<&T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item))
}

// ============================================================================
// SECTION: Optional Item Guards
// ============================================================================

/// Presence checks for collections of optional items.
pub trait OptionalItemGuards<T> {
    /// Returns true when some item is `None`.
    fn contains_none(&self) -> bool;

    /// Returns the items when none of them is `None`.
    ///
    /// # Errors
    ///
    /// Returns `NoneItem` naming the first absent index otherwise.
    fn must_not_contain_none(&self, parameter: &str) -> GuardResult<&[Option<T>]>;
}

impl<T> OptionalItemGuards<T> for [Option<T>] {
    fn contains_none(&self) -> bool {
        self.iter().any(Option::is_none)
    }

    fn must_not_contain_none(&self, parameter: &str) -> GuardResult<&[Option<T>]> {
        match self.iter().position(Option::is_none) {
            None => Ok(self),
            Some(index) => Err(throw::none_item(index, parameter)),
        }
    }
}
