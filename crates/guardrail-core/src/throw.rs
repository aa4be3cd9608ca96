// crates/guardrail-core/src/throw.rs
// ============================================================================
// Module: Default Error Construction
// Description: Constructors for the default error of every guard violation.
// Purpose: Centralize violation messages and observer reporting, and let
//          callers swap in their own errors.
// Dependencies: crate::{error, observer, range, render, string}
// ============================================================================

//! ## Overview
//! Assertions never build [`GuardError`] values themselves; they call the
//! constructor in this module that matches the violated condition. Every
//! constructor renders a message of the form
//! `"{parameter} must ..., but it actually is {value}."`, reports the error to
//! the installed observer once, and returns it.
//!
//! An empty parameter name means "unnamed": the message subject falls back to
//! `"The value"`, `"The string"`, `"The collection"`, `"The dictionary"` or
//! `"The URI"` depending on the group.
//!
//! [`GuardResultExt`] is the replacement seam. A caller either supplies a
//! prebuilt error ([`GuardResultExt::or_throw`]), a factory invoked only on
//! failure ([`GuardResultExt::or_throw_with`]), or just a new message
//! ([`GuardResultExt::with_message`]).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Debug;

use crate::error::GuardError;
use crate::error::GuardErrorKind;
use crate::error::GuardResult;
use crate::observer;
use crate::range::Range;
use crate::render;
use crate::string::StringComparison;

// ============================================================================
// SECTION: Subjects
// ============================================================================

/// Subject used for unnamed values.
const VALUE: &str = "The value";
/// Subject used for unnamed strings.
const STRING: &str = "The string";
/// Subject used for unnamed collections.
const COLLECTION: &str = "The collection";
/// Subject used for unnamed dictionaries.
const DICTIONARY: &str = "The dictionary";
/// Subject used for unnamed URIs.
const URI: &str = "The URI";

// ============================================================================
// SECTION: Reporting
// ============================================================================

/// Builds the error, reports it to the observer, and returns it.
fn raise(kind: GuardErrorKind, parameter: &str, message: String) -> GuardError {
    let parameter = (!parameter.is_empty()).then_some(parameter);
    let error = GuardError::new(kind, parameter, message);
    observer::notify(&error);
    error
}

// ============================================================================
// SECTION: Value Violations
// ============================================================================

/// Default error for an absent required value.
#[must_use]
pub fn argument_null(parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    raise(GuardErrorKind::ArgumentNull, parameter, format!("{subject} must not be None."))
}

/// Default error for a value that was expected to be absent.
#[must_use]
pub fn must_be_none<T: Debug + ?Sized>(value: &T, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    raise(
        GuardErrorKind::InvalidArgument,
        parameter,
        format!("{subject} must be None, but it actually is {value}."),
    )
}

/// Default error for a value equal to its type's default.
#[must_use]
pub fn argument_default(parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    raise(
        GuardErrorKind::ArgumentDefault,
        parameter,
        format!("{subject} must not be the default value."),
    )
}

/// Default error for two values that should be equal.
#[must_use]
pub fn values_not_equal<T: Debug + ?Sized, U: Debug + ?Sized>(
    value: &T,
    other: &U,
    parameter: &str,
) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    let other = render::value(other);
    raise(
        GuardErrorKind::ValuesNotEqual,
        parameter,
        format!("{subject} must be equal to {other}, but it actually is {value}."),
    )
}

/// Default error for two values that should differ.
#[must_use]
pub fn values_equal<T: Debug + ?Sized>(other: &T, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let other = render::value(other);
    raise(
        GuardErrorKind::ValuesEqual,
        parameter,
        format!("{subject} must not be equal to {other}, but it actually is."),
    )
}

/// Default error for two references to the same instance.
#[must_use]
pub fn same_reference(parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    raise(
        GuardErrorKind::SameReference,
        parameter,
        format!("{subject} must not point to the same instance as the given reference."),
    )
}

/// Default error for a value missing from an allow-list.
#[must_use]
pub fn not_one_of<T: Debug>(value: &T, items: &[T], parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    let items = render::items(items);
    raise(
        GuardErrorKind::MissingItem,
        parameter,
        format!("{subject} must be one of the items {items}, but it actually is {value}."),
    )
}

/// Default error for a value found in a deny-list.
#[must_use]
pub fn one_of<T: Debug>(value: &T, items: &[T], parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    let items = render::items(items);
    raise(
        GuardErrorKind::ExistingItem,
        parameter,
        format!("{subject} must not be one of the items {items}, but it actually is {value}."),
    )
}

// ============================================================================
// SECTION: Comparable Violations
// ============================================================================

/// Builds an out-of-range error for a failed bound comparison.
fn out_of_range<T: Debug + ?Sized, B: Debug + ?Sized>(
    value: &T,
    relation: &str,
    bound: &B,
    parameter: &str,
) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    let bound = render::value(bound);
    raise(
        GuardErrorKind::ArgumentOutOfRange,
        parameter,
        format!("{subject} must {relation} {bound}, but it actually is {value}."),
    )
}

/// Default error for a value that is not greater than `bound`.
#[must_use]
pub fn must_be_greater_than<T: Debug>(value: &T, bound: &T, parameter: &str) -> GuardError {
    out_of_range(value, "be greater than", bound, parameter)
}

/// Default error for a value that is less than `bound`.
#[must_use]
pub fn must_be_greater_than_or_equal_to<T: Debug>(
    value: &T,
    bound: &T,
    parameter: &str,
) -> GuardError {
    out_of_range(value, "be greater than or equal to", bound, parameter)
}

/// Default error for a value that is not less than `bound`.
#[must_use]
pub fn must_be_less_than<T: Debug>(value: &T, bound: &T, parameter: &str) -> GuardError {
    out_of_range(value, "be less than", bound, parameter)
}

/// Default error for a value that is greater than `bound`.
#[must_use]
pub fn must_be_less_than_or_equal_to<T: Debug>(
    value: &T,
    bound: &T,
    parameter: &str,
) -> GuardError {
    out_of_range(value, "be less than or equal to", bound, parameter)
}

/// Default error for a value that is greater than `bound`.
#[must_use]
pub fn must_not_be_greater_than<T: Debug>(value: &T, bound: &T, parameter: &str) -> GuardError {
    out_of_range(value, "not be greater than", bound, parameter)
}

/// Default error for a value that is less than `bound`.
#[must_use]
pub fn must_not_be_less_than<T: Debug>(value: &T, bound: &T, parameter: &str) -> GuardError {
    out_of_range(value, "not be less than", bound, parameter)
}

/// Default error for a value outside `range`.
#[must_use]
pub fn must_be_in<T: Debug>(value: &T, range: &Range<T>, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    raise(
        GuardErrorKind::ArgumentOutOfRange,
        parameter,
        format!("{subject} must be {}, but it actually is {value}.", range.describe()),
    )
}

/// Default error for a value inside `range`.
#[must_use]
pub fn must_not_be_in<T: Debug>(value: &T, range: &Range<T>, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    raise(
        GuardErrorKind::ArgumentOutOfRange,
        parameter,
        format!("{subject} must not be {}, but it actually is {value}.", range.describe()),
    )
}

/// Default error for a value that is not positive.
#[must_use]
pub fn must_be_positive<T: Debug>(value: &T, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    raise(
        GuardErrorKind::ArgumentOutOfRange,
        parameter,
        format!("{subject} must be positive, but it actually is {value}."),
    )
}

/// Default error for a value that is negative.
#[must_use]
pub fn must_not_be_negative<T: Debug>(value: &T, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    raise(
        GuardErrorKind::ArgumentOutOfRange,
        parameter,
        format!("{subject} must not be negative, but it actually is {value}."),
    )
}

/// Default error for a value that is not within `tolerance` of `other`.
#[must_use]
pub fn must_be_approximately<T: Debug>(
    value: &T,
    other: &T,
    tolerance: &T,
    parameter: &str,
) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    let other = render::value(other);
    let tolerance = render::value(tolerance);
    raise(
        GuardErrorKind::ArgumentOutOfRange,
        parameter,
        format!(
            "{subject} must be approximately {other} (tolerance {tolerance}), but it actually is \
             {value}."
        ),
    )
}

/// Default error for a value that is within `tolerance` of `other`.
#[must_use]
pub fn must_not_be_approximately<T: Debug>(
    value: &T,
    other: &T,
    tolerance: &T,
    parameter: &str,
) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    let value = render::value(value);
    let other = render::value(other);
    let tolerance = render::value(tolerance);
    raise(
        GuardErrorKind::ValuesEqual,
        parameter,
        format!(
            "{subject} must not be approximately {other} (tolerance {tolerance}), but it actually \
             is {value}."
        ),
    )
}

// ============================================================================
// SECTION: String Violations
// ============================================================================

/// Default error for an absent string.
#[must_use]
pub fn string_null(parameter: &str) -> GuardError {
    let subject = render::subject(parameter, STRING);
    raise(GuardErrorKind::ArgumentNull, parameter, format!("{subject} must not be None."))
}

/// Default error for an empty string.
#[must_use]
pub fn empty_string(parameter: &str) -> GuardError {
    let subject = render::subject(parameter, STRING);
    raise(
        GuardErrorKind::EmptyString,
        parameter,
        format!("{subject} must not be an empty string, but it actually is."),
    )
}

/// Default error for a string made only of white space.
#[must_use]
pub fn white_space_string(value: &str, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, STRING);
    let value = render::value(value);
    raise(
        GuardErrorKind::WhiteSpaceString,
        parameter,
        format!("{subject} must not contain only white space, but it actually is {value}."),
    )
}

/// Default error for a string breaking a casing or trimming rule.
#[must_use]
pub fn invalid_string(value: &str, rule: &str, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, STRING);
    let value = render::value(value);
    raise(
        GuardErrorKind::InvalidString,
        parameter,
        format!("{subject} must {rule}, but it actually is {value}."),
    )
}

/// Builds a substring error for a failed substring relation.
fn substring(
    value: &str,
    relation: &str,
    other: &str,
    comparison: StringComparison,
    parameter: &str,
) -> GuardError {
    let subject = render::subject(parameter, STRING);
    let value = render::value(value);
    let other = render::value(other);
    raise(
        GuardErrorKind::Substring,
        parameter,
        format!(
            "{subject} must {relation} {other} ({}), but it actually is {value}.",
            comparison.as_str()
        ),
    )
}

/// Default error for a string missing `needle`.
#[must_use]
pub fn must_contain(
    value: &str,
    needle: &str,
    comparison: StringComparison,
    parameter: &str,
) -> GuardError {
    substring(value, "contain", needle, comparison, parameter)
}

/// Default error for a string containing `needle`.
#[must_use]
pub fn must_not_contain(
    value: &str,
    needle: &str,
    comparison: StringComparison,
    parameter: &str,
) -> GuardError {
    substring(value, "not contain", needle, comparison, parameter)
}

/// Default error for a string that is not part of `haystack`.
#[must_use]
pub fn must_be_substring_of(
    value: &str,
    haystack: &str,
    comparison: StringComparison,
    parameter: &str,
) -> GuardError {
    substring(value, "be a substring of", haystack, comparison, parameter)
}

/// Default error for a string that is part of `haystack`.
#[must_use]
pub fn must_not_be_substring_of(
    value: &str,
    haystack: &str,
    comparison: StringComparison,
    parameter: &str,
) -> GuardError {
    substring(value, "not be a substring of", haystack, comparison, parameter)
}

/// Default error for a string not starting with `prefix`.
#[must_use]
pub fn must_start_with(
    value: &str,
    prefix: &str,
    comparison: StringComparison,
    parameter: &str,
) -> GuardError {
    substring(value, "start with", prefix, comparison, parameter)
}

/// Default error for a string not ending with `suffix`.
#[must_use]
pub fn must_end_with(
    value: &str,
    suffix: &str,
    comparison: StringComparison,
    parameter: &str,
) -> GuardError {
    substring(value, "end with", suffix, comparison, parameter)
}

/// Default error for strings that differ under `comparison`.
#[must_use]
pub fn strings_not_equal(
    value: &str,
    other: &str,
    comparison: StringComparison,
    parameter: &str,
) -> GuardError {
    let subject = render::subject(parameter, STRING);
    let value = render::value(value);
    let other = render::value(other);
    raise(
        GuardErrorKind::ValuesNotEqual,
        parameter,
        format!(
            "{subject} must be equal to {other} ({}), but it actually is {value}.",
            comparison.as_str()
        ),
    )
}

/// Default error for strings that are equal under `comparison`.
#[must_use]
pub fn strings_equal(
    value: &str,
    other: &str,
    comparison: StringComparison,
    parameter: &str,
) -> GuardError {
    let subject = render::subject(parameter, STRING);
    let value = render::value(value);
    let other = render::value(other);
    raise(
        GuardErrorKind::ValuesEqual,
        parameter,
        format!(
            "{subject} must not be equal to {other} ({}), but it actually is {value}.",
            comparison.as_str()
        ),
    )
}

/// Default error for a string length outside its bound.
#[must_use]
pub fn string_length(value: &str, relation: &str, length: usize, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, STRING);
    let actual = value.chars().count();
    let value = render::value(value);
    raise(
        GuardErrorKind::StringLength,
        parameter,
        format!(
            "{subject} must have {relation} {length}, but it actually has length {actual} \
             ({value})."
        ),
    )
}

/// Default error for a string length outside `range`.
#[must_use]
pub fn string_length_in(value: &str, range: &Range<usize>, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, STRING);
    let actual = value.chars().count();
    let value = render::value(value);
    raise(
        GuardErrorKind::StringLength,
        parameter,
        format!(
            "{subject} must have a length {}, but it actually has length {actual} ({value}).",
            range.describe()
        ),
    )
}

/// Default error for a string not matching `pattern`.
#[must_use]
pub fn string_mismatch(value: &str, pattern: &str, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, STRING);
    let value = render::value(value);
    let pattern = render::value(pattern);
    raise(
        GuardErrorKind::StringMismatch,
        parameter,
        format!("{subject} must match the pattern {pattern}, but it actually is {value}."),
    )
}

/// Default error for an invalid email address.
#[must_use]
pub fn invalid_email_address(value: &str, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, STRING);
    let value = render::value(value);
    raise(
        GuardErrorKind::InvalidEmailAddress,
        parameter,
        format!("{subject} must be a valid email address, but it actually is {value}."),
    )
}

// ============================================================================
// SECTION: Collection Violations
// ============================================================================

/// Default error for an empty collection.
#[must_use]
pub fn empty_collection(parameter: &str) -> GuardError {
    let subject = render::subject(parameter, COLLECTION);
    raise(
        GuardErrorKind::EmptyCollection,
        parameter,
        format!("{subject} must not be an empty collection, but it actually is."),
    )
}

/// Default error for a collection count outside its bound.
#[must_use]
pub fn invalid_collection_count<T: Debug>(
    items: &[T],
    relation: &str,
    count: usize,
    parameter: &str,
) -> GuardError {
    let subject = render::subject(parameter, COLLECTION);
    let actual = items.len();
    let rendered = render::items(items);
    raise(
        GuardErrorKind::InvalidCollectionCount,
        parameter,
        format!(
            "{subject} must have {relation} {count} item(s), but it actually has {actual} item(s) \
             {rendered}."
        ),
    )
}

/// Default error for a collection missing `item`.
#[must_use]
pub fn missing_item<T: Debug>(items: &[T], item: &T, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, COLLECTION);
    let item = render::value(item);
    let items = render::items(items);
    raise(
        GuardErrorKind::MissingItem,
        parameter,
        format!("{subject} must contain {item}, but it actually is {items}."),
    )
}

/// Default error for a collection containing `item`.
#[must_use]
pub fn existing_item<T: Debug>(items: &[T], item: &T, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, COLLECTION);
    let item = render::value(item);
    let items = render::items(items);
    raise(
        GuardErrorKind::ExistingItem,
        parameter,
        format!("{subject} must not contain {item}, but it actually is {items}."),
    )
}

/// Builds a collection error for a failed relation against `other`.
fn collection_relation<T: Debug>(
    items: &[T],
    relation: &str,
    other: &[T],
    parameter: &str,
) -> GuardError {
    let subject = render::subject(parameter, COLLECTION);
    let items = render::items(items);
    let other = render::items(other);
    raise(
        GuardErrorKind::InvalidCollection,
        parameter,
        format!("{subject} must {relation} {other}, but it actually is {items}."),
    )
}

/// Default error for a collection that is not a subset of `superset`.
#[must_use]
pub fn not_subset<T: Debug>(items: &[T], superset: &[T], parameter: &str) -> GuardError {
    collection_relation(items, "be a subset of", superset, parameter)
}

/// Default error for a collection that is not a superset of `subset`.
#[must_use]
pub fn not_superset<T: Debug>(items: &[T], subset: &[T], parameter: &str) -> GuardError {
    collection_relation(items, "be a superset of", subset, parameter)
}

/// Default error for a collection not starting with `prefix`.
#[must_use]
pub fn not_starting_with<T: Debug>(items: &[T], prefix: &[T], parameter: &str) -> GuardError {
    collection_relation(items, "start with", prefix, parameter)
}

/// Default error for a collection not ending with `suffix`.
#[must_use]
pub fn not_ending_with<T: Debug>(items: &[T], suffix: &[T], parameter: &str) -> GuardError {
    collection_relation(items, "end with", suffix, parameter)
}

/// Default error for a collection holding `duplicate` more than once.
#[must_use]
pub fn duplicate_item<T: Debug>(items: &[T], duplicate: &T, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, COLLECTION);
    let duplicate = render::value(duplicate);
    let items = render::items(items);
    raise(
        GuardErrorKind::InvalidCollection,
        parameter,
        format!(
            "{subject} must be a collection with unique items, but {duplicate} occurs more than \
             once in {items}."
        ),
    )
}

/// Default error for a collection holding `None` at `index`.
#[must_use]
pub fn none_item(index: usize, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, COLLECTION);
    raise(
        GuardErrorKind::NoneItem,
        parameter,
        format!("{subject} must not contain None items, but it actually does at index {index}."),
    )
}

// ============================================================================
// SECTION: Dictionary Violations
// ============================================================================

/// Default error for a dictionary missing `key`.
#[must_use]
pub fn missing_key<K: Debug + ?Sized>(key: &K, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, DICTIONARY);
    let key = render::value(key);
    raise(
        GuardErrorKind::MissingKey,
        parameter,
        format!("{subject} must contain the key {key}, but it does not."),
    )
}

/// Default error for a dictionary containing `key`.
#[must_use]
pub fn existing_key<K: Debug + ?Sized>(key: &K, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, DICTIONARY);
    let key = render::value(key);
    raise(
        GuardErrorKind::ExistingKey,
        parameter,
        format!("{subject} must not contain the key {key}, but it actually does."),
    )
}

/// Default error for a dictionary missing `value`.
#[must_use]
pub fn missing_value<V: Debug + ?Sized>(value: &V, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, DICTIONARY);
    let value = render::value(value);
    raise(
        GuardErrorKind::MissingItem,
        parameter,
        format!("{subject} must contain the value {value}, but it does not."),
    )
}

/// Default error for a dictionary containing `value`.
#[must_use]
pub fn existing_value<V: Debug + ?Sized>(value: &V, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, DICTIONARY);
    let value = render::value(value);
    raise(
        GuardErrorKind::ExistingItem,
        parameter,
        format!("{subject} must not contain the value {value}, but it actually does."),
    )
}

// ============================================================================
// SECTION: URI Violations
// ============================================================================

/// Default error for a string that is not a URI reference.
#[must_use]
pub fn invalid_uri(value: &str, reason: &str, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, URI);
    let value = render::value(value);
    raise(
        GuardErrorKind::InvalidUri,
        parameter,
        format!("{subject} must be a valid URI reference, but {value} is not ({reason})."),
    )
}

/// Default error for an absolute URI where a relative one was required.
#[must_use]
pub fn absolute_uri(value: &str, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, URI);
    let value = render::value(value);
    raise(
        GuardErrorKind::AbsoluteUri,
        parameter,
        format!("{subject} must be a relative URI, but it actually is {value}."),
    )
}

/// Default error for a relative URI where an absolute one was required.
#[must_use]
pub fn relative_uri(value: &str, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, URI);
    let value = render::value(value);
    raise(
        GuardErrorKind::RelativeUri,
        parameter,
        format!("{subject} must be an absolute URI, but it actually is {value}."),
    )
}

/// Default error for a URI whose scheme is not accepted.
#[must_use]
pub fn invalid_uri_scheme(value: &str, expected: &[&str], parameter: &str) -> GuardError {
    let subject = render::subject(parameter, URI);
    let value = render::value(value);
    let expected = render::items(expected);
    raise(
        GuardErrorKind::InvalidUriScheme,
        parameter,
        format!("{subject} must use one of the schemes {expected}, but it actually is {value}."),
    )
}

// ============================================================================
// SECTION: Type Violations
// ============================================================================

/// Default error for a value that is not of the type named `expected`.
#[must_use]
pub fn type_cast(expected: &str, parameter: &str) -> GuardError {
    let subject = render::subject(parameter, VALUE);
    raise(
        GuardErrorKind::TypeCast,
        parameter,
        format!("{subject} must be of type {expected}, but it actually is not."),
    )
}

// ============================================================================
// SECTION: State Violations
// ============================================================================

/// Default error for an invalid argument.
#[must_use]
pub fn invalid_argument(parameter: &str, message: &str) -> GuardError {
    let message = if message.is_empty() {
        format!("{} is invalid.", render::subject(parameter, VALUE))
    } else {
        message.to_string()
    };
    raise(GuardErrorKind::InvalidArgument, parameter, message)
}

/// Default error for an object in an invalid state.
#[must_use]
pub fn invalid_state(message: &str) -> GuardError {
    let message =
        if message.is_empty() { "The object is in an invalid state." } else { message };
    raise(GuardErrorKind::InvalidState, "", message.to_string())
}

/// Default error for an operation invoked at an invalid time.
#[must_use]
pub fn invalid_operation(message: &str) -> GuardError {
    let message =
        if message.is_empty() { "The operation is not valid at this time." } else { message };
    raise(GuardErrorKind::InvalidOperation, "", message.to_string())
}

// ============================================================================
// SECTION: Replacement Seam
// ============================================================================

/// Replaces default guard errors with caller-supplied ones.
pub trait GuardResultExt<T> {
    /// Replaces a failure with the prebuilt `error`.
    ///
    /// # Errors
    ///
    /// Returns `error` when the guard failed.
    fn or_throw<E>(self, error: E) -> Result<T, E>;

    /// Replaces a failure with the output of `factory`, which receives the
    /// default error and is only invoked on failure.
    ///
    /// # Errors
    ///
    /// Returns the factory output when the guard failed.
    fn or_throw_with<E, F>(self, factory: F) -> Result<T, E>
    where
        F: FnOnce(GuardError) -> E;

    /// Replaces the message of a failure, keeping kind and parameter.
    ///
    /// # Errors
    ///
    /// Returns the re-messaged error when the guard failed.
    fn with_message(self, message: impl Into<String>) -> GuardResult<T>;
}

impl<T> GuardResultExt<T> for GuardResult<T> {
    fn or_throw<E>(self, error: E) -> Result<T, E> {
        self.map_err(|_| error)
    }

    fn or_throw_with<E, F>(self, factory: F) -> Result<T, E>
    where
        F: FnOnce(GuardError) -> E,
    {
        self.map_err(factory)
    }

    fn with_message(self, message: impl Into<String>) -> GuardResult<T> {
        self.map_err(|error| error.with_message(message))
    }
}
