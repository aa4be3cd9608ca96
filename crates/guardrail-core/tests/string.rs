// crates/guardrail-core/tests/string.rs
// ============================================================================
// Module: String Guard Tests
// Description: Emptiness, substring, equality, length, pattern, email, and
//              casing checks for strings.
// Purpose: Pin comparison-mode semantics and char-based lengths.
// Dependencies: regex, guardrail_core::string
// ============================================================================
//! ## Overview
//! Integration tests for [`StringGuards`] and [`OptionalStringGuards`].

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use guardrail_core::GuardErrorKind;
use guardrail_core::OptionalStringGuards;
use guardrail_core::Range;
use guardrail_core::StringComparison;
use guardrail_core::StringGuards;
use guardrail_core::equals_with;
use regex::Regex;
use support::TestResult;
use support::ensure;
use support::ensure_violation;
use support::violation_message;

// ============================================================================
// SECTION: Emptiness
// ============================================================================

#[test]
fn empty_and_white_space() -> TestResult {
    ensure("abc".must_not_be_empty("name")? == "abc", "non-empty passes")?;
    ensure_violation("".must_not_be_empty("name"), GuardErrorKind::EmptyString)?;
    ensure_violation("".must_not_be_white_space("name"), GuardErrorKind::EmptyString)?;
    ensure_violation(" \t\n".must_not_be_white_space("name"), GuardErrorKind::WhiteSpaceString)?;
    ensure("".is_white_space(), "the empty string counts as white space")?;
    " a ".must_not_be_white_space("name")?;
    Ok(())
}

#[test]
fn optional_strings() -> TestResult {
    ensure(None::<&str>.is_none_or_empty(), "None is none-or-empty")?;
    ensure(Some("  ").is_none_or_white_space(), "blank is none-or-white-space")?;
    ensure(!Some("x").is_none_or_empty(), "x is not none-or-empty")?;
    let owned = Some("value".to_string()).must_not_be_none_or_empty("v")?;
    ensure(owned == "value", "owned strings are returned")?;
    ensure_violation(None::<String>.must_not_be_none_or_empty("v"), GuardErrorKind::ArgumentNull)?;
    ensure_violation(Some("").must_not_be_none_or_empty("v"), GuardErrorKind::EmptyString)?;
    ensure_violation(
        Some(" ").must_not_be_none_or_white_space("v"),
        GuardErrorKind::WhiteSpaceString,
    )?;
    let message = violation_message(None::<&str>.must_not_be_none_or_empty(""))?;
    ensure(message == "The string must not be None.", format!("unexpected message: {message}"))
}

// ============================================================================
// SECTION: Comparison Modes
// ============================================================================

#[test]
fn comparison_modes_normalize_case_and_white_space() -> TestResult {
    let ordinal = StringComparison::Ordinal;
    ensure(!equals_with("Hello World", "helloworld", ordinal), "ordinal is exact")?;
    ensure(equals_with("Hello", "hELLO", StringComparison::OrdinalIgnoreCase), "ignore case")?;
    ensure(
        equals_with("a b\tc", "abc", StringComparison::OrdinalIgnoreWhiteSpace),
        "ignore white space",
    )?;
    ensure(
        equals_with(
            "Hello World",
            "helloworld",
            StringComparison::OrdinalIgnoreCaseIgnoreWhiteSpace,
        ),
        "ignore both",
    )?;
    ensure(StringComparison::default() == StringComparison::Ordinal, "ordinal is the default")?;
    Ok(())
}

#[test]
fn substring_relations() -> TestResult {
    let ordinal = StringComparison::Ordinal;
    let ignore_case = StringComparison::OrdinalIgnoreCase;
    "Guardrail".must_contain("rail", ordinal, "s")?;
    ensure_violation("Guardrail".must_contain("RAIL", ordinal, "s"), GuardErrorKind::Substring)?;
    "Guardrail".must_contain("RAIL", ignore_case, "s")?;
    "Guardrail".must_not_contain("fence", ordinal, "s")?;
    "rail".must_be_substring_of("Guardrail", ordinal, "s")?;
    ensure_violation(
        "rail".must_not_be_substring_of("Guardrail", ordinal, "s"),
        GuardErrorKind::Substring,
    )?;
    "Guardrail".must_start_with("guard", ignore_case, "s")?;
    ensure_violation("Guardrail".must_end_with("guard", ordinal, "s"), GuardErrorKind::Substring)?;
    "Guard rail".must_end_with("drail", StringComparison::OrdinalIgnoreWhiteSpace, "s")?;
    Ok(())
}

#[test]
fn substring_message_names_the_mode() -> TestResult {
    let ignore_case = StringComparison::OrdinalIgnoreCase;
    let message = violation_message("abc".must_contain("z", ignore_case, "code"))?;
    ensure(
        message == "code must contain \"z\" (ordinal ignoring case), but it actually is \"abc\".",
        format!("unexpected message: {message}"),
    )
}

#[test]
fn equality_with_modes() -> TestResult {
    "ABC".must_equal_with("abc", StringComparison::OrdinalIgnoreCase, "s")?;
    ensure_violation(
        "ABC".must_equal_with("abc", StringComparison::Ordinal, "s"),
        GuardErrorKind::ValuesNotEqual,
    )?;
    ensure_violation(
        "ABC".must_not_equal_with("abc", StringComparison::OrdinalIgnoreCase, "s"),
        GuardErrorKind::ValuesEqual,
    )?;
    Ok(())
}

// ============================================================================
// SECTION: Length
// ============================================================================

#[test]
fn length_counts_chars_not_bytes() -> TestResult {
    "héllo".must_have_length(5, "s")?;
    "héllo".must_have_max_length(5, "s")?;
    ensure_violation("héllo".must_have_min_length(6, "s"), GuardErrorKind::StringLength)?;
    ensure_violation("héllo".must_have_length(6, "s"), GuardErrorKind::StringLength)?;
    let range = Range::from_inclusive(2_usize).to_exclusive(5)?;
    "abcd".must_have_length_in(&range, "s")?;
    ensure_violation("abcde".must_have_length_in(&range, "s"), GuardErrorKind::StringLength)?;
    Ok(())
}

// ============================================================================
// SECTION: Patterns
// ============================================================================

#[test]
fn regex_and_email_checks() -> TestResult {
    let digits = Regex::new(r"^\d+$")?;
    ensure("123".matches_regex(&digits), "digits match")?;
    "123".must_match(&digits, "code")?;
    ensure_violation("12a".must_match(&digits, "code"), GuardErrorKind::StringMismatch)?;
    for valid in ["someone@example.com", "First.Last+tag@sub.example.org", "ops@[192.168.0.1]"] {
        ensure(valid.is_email_address(), format!("{valid} should be valid"))?;
    }
    for invalid in ["not-an-email", "@example.com", "a..b@example.com", "user@-host.com"] {
        ensure(!invalid.is_email_address(), format!("{invalid} should be invalid"))?;
    }
    ensure_violation("nope".must_be_email_address("email"), GuardErrorKind::InvalidEmailAddress)?;
    Ok(())
}

#[test]
fn casing_and_trimming() -> TestResult {
    "lower-case 1".must_be_lower_case("s")?;
    ensure_violation("Mixed".must_be_lower_case("s"), GuardErrorKind::InvalidString)?;
    "UPPER 1".must_be_upper_case("s")?;
    ensure_violation("Mixed".must_be_upper_case("s"), GuardErrorKind::InvalidString)?;
    "trimmed".must_be_trimmed("s")?;
    ensure_violation(" padded".must_be_trimmed("s"), GuardErrorKind::InvalidString)?;
    ensure("".is_trimmed(), "the empty string is trimmed")?;
    Ok(())
}
