// crates/guardrail-core/src/dictionary.rs
// ============================================================================
// Module: Dictionary Guards
// Description: Key and value presence checks for maps.
// Purpose: Validate map arguments for both hashed and ordered maps.
// Dependencies: crate::{error, throw}
// ============================================================================

//! ## Overview
//! [`DictionaryGuards`] is implemented for `HashMap` and `BTreeMap`. Key
//! lookups use the map's own index; value lookups scan the values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::BuildHasher;
use std::hash::Hash;

use crate::error::GuardResult;
use crate::throw;

// ============================================================================
// SECTION: Dictionary Guards
// ============================================================================

/// Key and value presence checks for maps.
pub trait DictionaryGuards<K: Debug, V: PartialEq + Debug> {
    /// Returns true when `key` is present.
    fn has_key(&self, key: &K) -> bool;

    /// Returns true when `value` is stored under some key.
    fn has_value(&self, value: &V) -> bool;

    /// Returns the map when `key` is present.
    ///
    /// # Errors
    ///
    /// Returns `MissingKey` otherwise.
    fn must_contain_key(&self, key: &K, parameter: &str) -> GuardResult<&Self> {
        if self.has_key(key) { Ok(self) } else { Err(throw::missing_key(key, parameter)) }
    }

    /// Returns the map when `key` is absent.
    ///
    /// # Errors
    ///
    /// Returns `ExistingKey` otherwise.
    fn must_not_contain_key(&self, key: &K, parameter: &str) -> GuardResult<&Self> {
        if self.has_key(key) { Err(throw::existing_key(key, parameter)) } else { Ok(self) }
    }

    /// Returns the map when every key of `keys` is present.
    ///
    /// # Errors
    ///
    /// Returns `MissingKey` naming the first absent key otherwise.
    fn must_contain_keys(&self, keys: &[K], parameter: &str) -> GuardResult<&Self> {
        match keys.iter().find(|key| !self.has_key(key)) {
            None => Ok(self),
            Some(missing) => Err(throw::missing_key(missing, parameter)),
        }
    }

    /// Returns the map when `value` is stored under some key.
    ///
    /// # Errors
    ///
    /// Returns `MissingItem` otherwise.
    fn must_contain_value(&self, value: &V, parameter: &str) -> GuardResult<&Self> {
        if self.has_value(value) { Ok(self) } else { Err(throw::missing_value(value, parameter)) }
    }

    /// Returns the map when `value` is stored under no key.
    ///
    /// # Errors
    ///
    /// Returns `ExistingItem` otherwise.
    fn must_not_contain_value(&self, value: &V, parameter: &str) -> GuardResult<&Self> {
        if self.has_value(value) { Err(throw::existing_value(value, parameter)) } else { Ok(self) }
    }
}

impl<K, V, S> DictionaryGuards<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash + Debug,
    V: PartialEq + Debug,
    S: BuildHasher,
{
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn has_value(&self, value: &V) -> bool {
        self.values().any(|stored| stored == value)
    }
}

impl<K, V> DictionaryGuards<K, V> for BTreeMap<K, V>
where
    K: Ord + Debug,
    V: PartialEq + Debug,
{
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn has_value(&self, value: &V) -> bool {
        self.values().any(|stored| stored == value)
    }
}
