// crates/guardrail-core/src/string.rs
// ============================================================================
// Module: String Guards
// Description: Emptiness, substring, equality, length, pattern, and casing
//              checks for strings.
// Purpose: Validate textual arguments with configurable comparison modes.
// Dependencies: crate::{error, patterns, range, throw}, regex, serde
// ============================================================================

//! ## Overview
//! [`StringGuards`] is implemented for `str` (and therefore reachable from
//! `String` and `&str`). Optional strings get [`OptionalStringGuards`], which
//! folds the absent case into the same checks.
//!
//! Substring and equality checks take a [`StringComparison`]. Case-insensitive
//! modes compare Unicode lowercase mappings; white-space-insensitive modes drop
//! every `char::is_whitespace` character before comparing. Lengths count
//! `char`s, not bytes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::error::GuardResult;
use crate::patterns;
use crate::range::Range;
use crate::throw;

// ============================================================================
// SECTION: Comparison Modes
// ============================================================================

/// How two strings are compared.
///
/// # Invariants
/// - Variants are stable; labels appear in diagnostic messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringComparison {
    /// Exact, char-by-char comparison.
    #[default]
    Ordinal,
    /// Case-insensitive comparison.
    OrdinalIgnoreCase,
    /// Comparison ignoring all white space.
    OrdinalIgnoreWhiteSpace,
    /// Case-insensitive comparison ignoring all white space.
    OrdinalIgnoreCaseIgnoreWhiteSpace,
}

impl StringComparison {
    /// Returns a stable label for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ordinal => "ordinal",
            Self::OrdinalIgnoreCase => "ordinal ignoring case",
            Self::OrdinalIgnoreWhiteSpace => "ordinal ignoring white space",
            Self::OrdinalIgnoreCaseIgnoreWhiteSpace => "ordinal ignoring case and white space",
        }
    }

    /// Returns true when the mode ignores case.
    #[must_use]
    pub const fn ignores_case(self) -> bool {
        matches!(self, Self::OrdinalIgnoreCase | Self::OrdinalIgnoreCaseIgnoreWhiteSpace)
    }

    /// Returns true when the mode ignores white space.
    #[must_use]
    pub const fn ignores_white_space(self) -> bool {
        matches!(self, Self::OrdinalIgnoreWhiteSpace | Self::OrdinalIgnoreCaseIgnoreWhiteSpace)
    }

    /// Normalizes `value` so ordinal operations honor this mode.
    #[must_use]
    pub fn normalize(self, value: &str) -> Cow<'_, str> {
        let mut normalized = Cow::Borrowed(value);
        if self.ignores_white_space() && normalized.chars().any(char::is_whitespace) {
            normalized = Cow::Owned(normalized.chars().filter(|ch| !ch.is_whitespace()).collect());
        }
        if self.ignores_case() {
            normalized = Cow::Owned(normalized.to_lowercase());
        }
        normalized
    }
}

/// Returns true when `left` and `right` are equal under `comparison`.
#[must_use]
pub fn equals_with(left: &str, right: &str, comparison: StringComparison) -> bool {
    comparison.normalize(left) == comparison.normalize(right)
}

// ============================================================================
// SECTION: String Guards
// ============================================================================

/// Checks for string slices.
pub trait StringGuards {
    /// Returns the checked string; backs the provided methods.
    #[doc(hidden)]
    fn as_checked(&self) -> &str;

    /// Returns true when the string is empty or made only of white space.
    fn is_white_space(&self) -> bool {
        self.as_checked().chars().all(char::is_whitespace)
    }

    /// Returns the string when it is not empty.
    ///
    /// # Errors
    ///
    /// Returns `EmptyString` otherwise.
    fn must_not_be_empty(&self, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if value.is_empty() { Err(throw::empty_string(parameter)) } else { Ok(value) }
    }

    /// Returns the string when it holds at least one non-white-space char.
    ///
    /// # Errors
    ///
    /// Returns `EmptyString` for an empty string and `WhiteSpaceString` for a
    /// string made only of white space.
    fn must_not_be_white_space(&self, parameter: &str) -> GuardResult<&str> {
        let value = self.must_not_be_empty(parameter)?;
        if self.is_white_space() {
            Err(throw::white_space_string(value, parameter))
        } else {
            Ok(value)
        }
    }

    // ------------------------------------------------------------------------
    // Substrings
    // ------------------------------------------------------------------------

    /// Returns true when the string contains `needle` under `comparison`.
    fn contains_with(&self, needle: &str, comparison: StringComparison) -> bool {
        comparison.normalize(self.as_checked()).contains(&*comparison.normalize(needle))
    }

    /// Returns true when the string starts with `prefix` under `comparison`.
    fn starts_with_with(&self, prefix: &str, comparison: StringComparison) -> bool {
        comparison.normalize(self.as_checked()).starts_with(&*comparison.normalize(prefix))
    }

    /// Returns true when the string ends with `suffix` under `comparison`.
    fn ends_with_with(&self, suffix: &str, comparison: StringComparison) -> bool {
        comparison.normalize(self.as_checked()).ends_with(&*comparison.normalize(suffix))
    }

    /// Returns the string when it contains `needle`.
    ///
    /// # Errors
    ///
    /// Returns `Substring` otherwise.
    fn must_contain(
        &self,
        needle: &str,
        comparison: StringComparison,
        parameter: &str,
    ) -> GuardResult<&str> {
        let value = self.as_checked();
        if self.contains_with(needle, comparison) {
            Ok(value)
        } else {
            Err(throw::must_contain(value, needle, comparison, parameter))
        }
    }

    /// Returns the string when it does not contain `needle`.
    ///
    /// # Errors
    ///
    /// Returns `Substring` otherwise.
    fn must_not_contain(
        &self,
        needle: &str,
        comparison: StringComparison,
        parameter: &str,
    ) -> GuardResult<&str> {
        let value = self.as_checked();
        if self.contains_with(needle, comparison) {
            Err(throw::must_not_contain(value, needle, comparison, parameter))
        } else {
            Ok(value)
        }
    }

    /// Returns the string when it occurs within `haystack`.
    ///
    /// # Errors
    ///
    /// Returns `Substring` otherwise.
    fn must_be_substring_of(
        &self,
        haystack: &str,
        comparison: StringComparison,
        parameter: &str,
    ) -> GuardResult<&str> {
        let value = self.as_checked();
        if haystack.contains_with(value, comparison) {
            Ok(value)
        } else {
            Err(throw::must_be_substring_of(value, haystack, comparison, parameter))
        }
    }

    /// Returns the string when it does not occur within `haystack`.
    ///
    /// # Errors
    ///
    /// Returns `Substring` otherwise.
    fn must_not_be_substring_of(
        &self,
        haystack: &str,
        comparison: StringComparison,
        parameter: &str,
    ) -> GuardResult<&str> {
        let value = self.as_checked();
        if haystack.contains_with(value, comparison) {
            Err(throw::must_not_be_substring_of(value, haystack, comparison, parameter))
        } else {
            Ok(value)
        }
    }

    /// Returns the string when it starts with `prefix`.
    ///
    /// # Errors
    ///
    /// Returns `Substring` otherwise.
    fn must_start_with(
        &self,
        prefix: &str,
        comparison: StringComparison,
        parameter: &str,
    ) -> GuardResult<&str> {
        let value = self.as_checked();
        if self.starts_with_with(prefix, comparison) {
            Ok(value)
        } else {
            Err(throw::must_start_with(value, prefix, comparison, parameter))
        }
    }

    /// Returns the string when it ends with `suffix`.
    ///
    /// # Errors
    ///
    /// Returns `Substring` otherwise.
    fn must_end_with(
        &self,
        suffix: &str,
        comparison: StringComparison,
        parameter: &str,
    ) -> GuardResult<&str> {
        let value = self.as_checked();
        if self.ends_with_with(suffix, comparison) {
            Ok(value)
        } else {
            Err(throw::must_end_with(value, suffix, comparison, parameter))
        }
    }

    // ------------------------------------------------------------------------
    // Equality
    // ------------------------------------------------------------------------

    /// Returns the string when it equals `other` under `comparison`.
    ///
    /// # Errors
    ///
    /// Returns `ValuesNotEqual` otherwise.
    fn must_equal_with(
        &self,
        other: &str,
        comparison: StringComparison,
        parameter: &str,
    ) -> GuardResult<&str> {
        let value = self.as_checked();
        if equals_with(value, other, comparison) {
            Ok(value)
        } else {
            Err(throw::strings_not_equal(value, other, comparison, parameter))
        }
    }

    /// Returns the string when it differs from `other` under `comparison`.
    ///
    /// # Errors
    ///
    /// Returns `ValuesEqual` otherwise.
    fn must_not_equal_with(
        &self,
        other: &str,
        comparison: StringComparison,
        parameter: &str,
    ) -> GuardResult<&str> {
        let value = self.as_checked();
        if equals_with(value, other, comparison) {
            Err(throw::strings_equal(value, other, comparison, parameter))
        } else {
            Ok(value)
        }
    }

    // ------------------------------------------------------------------------
    // Length
    // ------------------------------------------------------------------------

    /// Returns the string when it has exactly `length` chars.
    ///
    /// # Errors
    ///
    /// Returns `StringLength` otherwise.
    fn must_have_length(&self, length: usize, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if value.chars().count() == length {
            Ok(value)
        } else {
            Err(throw::string_length(value, "length", length, parameter))
        }
    }

    /// Returns the string when it has at least `length` chars.
    ///
    /// # Errors
    ///
    /// Returns `StringLength` otherwise.
    fn must_have_min_length(&self, length: usize, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if value.chars().count() >= length {
            Ok(value)
        } else {
            Err(throw::string_length(value, "a minimum length of", length, parameter))
        }
    }

    /// Returns the string when it has at most `length` chars.
    ///
    /// # Errors
    ///
    /// Returns `StringLength` otherwise.
    fn must_have_max_length(&self, length: usize, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if value.chars().count() <= length {
            Ok(value)
        } else {
            Err(throw::string_length(value, "a maximum length of", length, parameter))
        }
    }

    /// Returns the string when its char count lies within `range`.
    ///
    /// # Errors
    ///
    /// Returns `StringLength` otherwise.
    fn must_have_length_in(&self, range: &Range<usize>, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if range.is_value_within_range(&value.chars().count()) {
            Ok(value)
        } else {
            Err(throw::string_length_in(value, range, parameter))
        }
    }

    // ------------------------------------------------------------------------
    // Patterns
    // ------------------------------------------------------------------------

    /// Returns true when `pattern` matches the string.
    fn matches_regex(&self, pattern: &Regex) -> bool {
        pattern.is_match(self.as_checked())
    }

    /// Returns the string when `pattern` matches it.
    ///
    /// # Errors
    ///
    /// Returns `StringMismatch` otherwise.
    fn must_match(&self, pattern: &Regex, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if pattern.is_match(value) {
            Ok(value)
        } else {
            Err(throw::string_mismatch(value, pattern.as_str(), parameter))
        }
    }

    /// Returns true when the string is a valid email address.
    fn is_email_address(&self) -> bool {
        patterns::email_address().is_some_and(|pattern| pattern.is_match(self.as_checked()))
    }

    /// Returns the string when it is a valid email address.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmailAddress` otherwise.
    fn must_be_email_address(&self, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if self.is_email_address() {
            Ok(value)
        } else {
            Err(throw::invalid_email_address(value, parameter))
        }
    }

    // ------------------------------------------------------------------------
    // Casing and trimming
    // ------------------------------------------------------------------------

    /// Returns true when the string has no leading or trailing white space.
    fn is_trimmed(&self) -> bool {
        let value = self.as_checked();
        value.trim().len() == value.len()
    }

    /// Returns true when no char of the string is upper case.
    fn is_lower_case(&self) -> bool {
        !self.as_checked().chars().any(char::is_uppercase)
    }

    /// Returns true when no char of the string is lower case.
    fn is_upper_case(&self) -> bool {
        !self.as_checked().chars().any(char::is_lowercase)
    }

    /// Returns the string when it has no leading or trailing white space.
    ///
    /// # Errors
    ///
    /// Returns `InvalidString` otherwise.
    fn must_be_trimmed(&self, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if self.is_trimmed() {
            Ok(value)
        } else {
            Err(throw::invalid_string(value, "be trimmed", parameter))
        }
    }

    /// Returns the string when no char of it is upper case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidString` otherwise.
    fn must_be_lower_case(&self, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if self.is_lower_case() {
            Ok(value)
        } else {
            Err(throw::invalid_string(value, "be lower case", parameter))
        }
    }

    /// Returns the string when no char of it is lower case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidString` otherwise.
    fn must_be_upper_case(&self, parameter: &str) -> GuardResult<&str> {
        let value = self.as_checked();
        if self.is_upper_case() {
            Ok(value)
        } else {
            Err(throw::invalid_string(value, "be upper case", parameter))
        }
    }
}

impl StringGuards for str {
    fn as_checked(&self) -> &str {
        self
    }
}

// ============================================================================
// SECTION: Optional String Guards
// ============================================================================

/// Absence-aware checks for optional strings.
pub trait OptionalStringGuards<S> {
    /// Returns true when the string is absent or empty.
    fn is_none_or_empty(&self) -> bool;

    /// Returns true when the string is absent, empty, or only white space.
    fn is_none_or_white_space(&self) -> bool;

    /// Returns the string when it is present and not empty.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentNull` when absent and `EmptyString` when empty.
    fn must_not_be_none_or_empty(self, parameter: &str) -> GuardResult<S>;

    /// Returns the string when it is present and holds a non-white-space char.
    ///
    /// # Errors
    ///
    /// Returns `ArgumentNull` when absent, `EmptyString` when empty, and
    /// `WhiteSpaceString` when made only of white space.
    fn must_not_be_none_or_white_space(self, parameter: &str) -> GuardResult<S>;
}

impl<S: AsRef<str>> OptionalStringGuards<S> for Option<S> {
    fn is_none_or_empty(&self) -> bool {
        self.as_ref().is_none_or(|value| value.as_ref().is_empty())
    }

    fn is_none_or_white_space(&self) -> bool {
        self.as_ref().is_none_or(|value| value.as_ref().is_white_space())
    }

    fn must_not_be_none_or_empty(self, parameter: &str) -> GuardResult<S> {
        let value = self.ok_or_else(|| throw::string_null(parameter))?;
        value.as_ref().must_not_be_empty(parameter)?;
        Ok(value)
    }

    fn must_not_be_none_or_white_space(self, parameter: &str) -> GuardResult<S> {
        let value = self.ok_or_else(|| throw::string_null(parameter))?;
        value.as_ref().must_not_be_white_space(parameter)?;
        Ok(value)
    }
}
