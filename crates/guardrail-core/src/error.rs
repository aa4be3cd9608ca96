// crates/guardrail-core/src/error.rs
// ============================================================================
// Module: Guard Error Definitions
// Description: Structured violation errors returned by every guard clause.
// Purpose: Provide one typed error carrying the violation kind, the offending
//          parameter, and a rendered diagnostic message.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Every assertion in this crate fails with a [`GuardError`]. The error keeps
//! the violation category ([`GuardErrorKind`]) separate from the rendered
//! message so callers can branch on the kind while still surfacing an
//! actionable diagnostic. Errors are plain data: cloneable, comparable, and
//! serializable for transport across process boundaries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Error Kinds
// ============================================================================

/// Violation categories reported by guard clauses.
///
/// # Invariants
/// - Variants and their labels are stable; downstream code may match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardErrorKind {
    // ============================================================================
    // SECTION: Value Violations
    // ============================================================================
    /// A required value was absent.
    ArgumentNull,
    /// A value equals its type's default.
    ArgumentDefault,
    /// A generic argument violation raised by state checks.
    InvalidArgument,
    /// A value lies outside an accepted bound or range.
    ArgumentOutOfRange,
    /// Two values were expected to be equal.
    ValuesNotEqual,
    /// Two values were expected to differ.
    ValuesEqual,
    /// Two references point to the same instance.
    SameReference,

    // ============================================================================
    // SECTION: String Violations
    // ============================================================================
    /// A string was empty.
    EmptyString,
    /// A string consisted only of white space.
    WhiteSpaceString,
    /// A string violated a casing or trimming rule.
    InvalidString,
    /// A substring relation did not hold.
    Substring,
    /// A string length was outside the accepted bounds.
    StringLength,
    /// A string did not match a regular expression.
    StringMismatch,
    /// A string was not a valid email address.
    InvalidEmailAddress,

    // ============================================================================
    // SECTION: Collection Violations
    // ============================================================================
    /// A collection was empty.
    EmptyCollection,
    /// A collection count was outside the accepted bounds.
    InvalidCollectionCount,
    /// An expected item was missing.
    MissingItem,
    /// An unexpected item was present.
    ExistingItem,
    /// A collection relation (subset, uniqueness, sequence) did not hold.
    InvalidCollection,
    /// A collection contained an absent (`None`) item.
    NoneItem,
    /// An expected dictionary key was missing.
    MissingKey,
    /// An unexpected dictionary key was present.
    ExistingKey,

    // ============================================================================
    // SECTION: URI Violations
    // ============================================================================
    /// A string could not be parsed as a URI reference.
    InvalidUri,
    /// A URI was absolute where a relative one was required.
    AbsoluteUri,
    /// A URI was relative where an absolute one was required.
    RelativeUri,
    /// A URI scheme was not accepted.
    InvalidUriScheme,

    // ============================================================================
    // SECTION: Type and State Violations
    // ============================================================================
    /// A value was not of the expected type.
    TypeCast,
    /// An object was in an invalid state.
    InvalidState,
    /// An operation was invoked at an invalid time.
    InvalidOperation,
}

impl GuardErrorKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArgumentNull => "argument_null",
            Self::ArgumentDefault => "argument_default",
            Self::InvalidArgument => "invalid_argument",
            Self::ArgumentOutOfRange => "argument_out_of_range",
            Self::ValuesNotEqual => "values_not_equal",
            Self::ValuesEqual => "values_equal",
            Self::SameReference => "same_reference",
            Self::EmptyString => "empty_string",
            Self::WhiteSpaceString => "white_space_string",
            Self::InvalidString => "invalid_string",
            Self::Substring => "substring",
            Self::StringLength => "string_length",
            Self::StringMismatch => "string_mismatch",
            Self::InvalidEmailAddress => "invalid_email_address",
            Self::EmptyCollection => "empty_collection",
            Self::InvalidCollectionCount => "invalid_collection_count",
            Self::MissingItem => "missing_item",
            Self::ExistingItem => "existing_item",
            Self::InvalidCollection => "invalid_collection",
            Self::NoneItem => "none_item",
            Self::MissingKey => "missing_key",
            Self::ExistingKey => "existing_key",
            Self::InvalidUri => "invalid_uri",
            Self::AbsoluteUri => "absolute_uri",
            Self::RelativeUri => "relative_uri",
            Self::InvalidUriScheme => "invalid_uri_scheme",
            Self::TypeCast => "type_cast",
            Self::InvalidState => "invalid_state",
            Self::InvalidOperation => "invalid_operation",
        }
    }

    /// Returns true when the kind describes a bad argument rather than a bad
    /// object state or call order.
    #[must_use]
    pub const fn is_argument_error(self) -> bool {
        !matches!(self, Self::InvalidState | Self::InvalidOperation)
    }
}

// ============================================================================
// SECTION: Guard Error
// ============================================================================

/// Error returned when a guard clause is violated.
///
/// # Invariants
/// - `message` is always non-empty for errors built by the `throw` module.
/// - `parameter` is `None` only when the caller supplied no parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct GuardError {
    /// Violation category.
    kind: GuardErrorKind,
    /// Name of the offending parameter, when known.
    parameter: Option<String>,
    /// Rendered diagnostic message.
    message: String,
}

impl GuardError {
    /// Creates a guard error from its parts.
    #[must_use]
    pub fn new(kind: GuardErrorKind, parameter: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            kind,
            parameter: parameter.map(ToString::to_string),
            message: message.into(),
        }
    }

    /// Returns the violation category.
    #[must_use]
    pub const fn kind(&self) -> GuardErrorKind {
        self.kind
    }

    /// Returns the offending parameter name, when known.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Returns the rendered diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replaces the message, keeping kind and parameter.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replaces the parameter name, keeping kind and message.
    #[must_use]
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Returns true when the error describes a bad argument.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        self.kind.is_argument_error()
    }
}

// ============================================================================
// SECTION: Result Alias
// ============================================================================

/// Convenient Result type for guard clauses.
pub type GuardResult<T = ()> = Result<T, GuardError>;
