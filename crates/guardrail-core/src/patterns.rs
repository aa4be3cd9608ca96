// crates/guardrail-core/src/patterns.rs
// ============================================================================
// Module: Compiled Patterns
// Description: Regular expressions shared by string guards.
// Purpose: Compile each pattern once per process.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! Patterns compile lazily on first use. A pattern that fails to compile
//! yields `None`, and checks built on it report no match, so a broken pattern
//! rejects input instead of accepting it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::LazyLock;

use regex::Regex;

// ============================================================================
// SECTION: Email Address
// ============================================================================

/// Dot-atom local part, `@`, then a dotted host name or a bracketed IPv4
/// literal. Matching is case-insensitive.
pub const EMAIL_ADDRESS_PATTERN: &str = concat!(
    r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@",
    r"(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?",
    r"|\[(?:[0-9]{1,3}\.){3}[0-9]{1,3}\])$",
);

/// Compiled email address pattern.
static EMAIL_ADDRESS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(EMAIL_ADDRESS_PATTERN).ok());

/// Returns the compiled email address pattern, if it compiled.
#[must_use]
pub fn email_address() -> Option<&'static Regex> {
    EMAIL_ADDRESS.as_ref()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
