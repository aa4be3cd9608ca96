// crates/guardrail-core/tests/collection.rs
// ============================================================================
// Module: Collection Guard Tests
// Description: Count, membership, subset, uniqueness, and sequence checks.
// Purpose: Ensure slice guards accept arrays and vectors alike.
// Dependencies: guardrail_core::collection
// ============================================================================
//! ## Overview
//! Integration tests for [`CollectionGuards`] and [`OptionalItemGuards`].

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use guardrail_core::CollectionGuards;
use guardrail_core::GuardErrorKind;
use guardrail_core::OptionalItemGuards;
use support::TestResult;
use support::ensure;
use support::ensure_violation;
use support::violation_message;

#[test]
fn emptiness_and_counts() -> TestResult {
    let items = vec![1_u8, 2, 3];
    ensure(items.must_not_be_empty("items")?.len() == 3, "items are returned")?;
    ensure_violation(Vec::<u8>::new().must_not_be_empty("items"), GuardErrorKind::EmptyCollection)?;
    items.must_have_count(3, "items")?;
    items.must_have_min_count(3, "items")?;
    items.must_have_max_count(3, "items")?;
    ensure_violation(items.must_have_count(2, "items"), GuardErrorKind::InvalidCollectionCount)?;
    ensure_violation(
        items.must_have_min_count(4, "items"),
        GuardErrorKind::InvalidCollectionCount,
    )?;
    ensure_violation(
        items.must_have_max_count(2, "items"),
        GuardErrorKind::InvalidCollectionCount,
    )?;
    Ok(())
}

#[test]
fn count_message_renders_items() -> TestResult {
    let message = violation_message([1_u8, 2].must_have_min_count(3, ""))?;
    ensure(
        message
            == "The collection must have at least 3 item(s), but it actually has 2 item(s) [1, 2].",
        format!("unexpected message: {message}"),
    )
}

#[test]
fn membership() -> TestResult {
    let names = ["ada", "grace"];
    names.must_contain(&"ada", "names")?;
    ensure_violation(names.must_contain(&"alan", "names"), GuardErrorKind::MissingItem)?;
    names.must_not_contain(&"alan", "names")?;
    ensure_violation(names.must_not_contain(&"grace", "names"), GuardErrorKind::ExistingItem)?;
    Ok(())
}

#[test]
fn subsets_ignore_multiplicity() -> TestResult {
    ensure([1_i32, 1].is_subset_of(&[1]), "repeats do not matter")?;
    ensure([1_i32, 2, 3].is_superset_of(&[3, 1]), "order does not matter")?;
    ensure(Vec::<i32>::new().is_subset_of(&[]), "empty is a subset of empty")?;
    [2_i32, 3].must_be_subset_of(&[1, 2, 3], "tags")?;
    ensure_violation(
        [2_i32, 4].must_be_subset_of(&[1, 2, 3], "tags"),
        GuardErrorKind::InvalidCollection,
    )?;
    ensure_violation(
        [1_i32, 2].must_be_superset_of(&[3], "tags"),
        GuardErrorKind::InvalidCollection,
    )?;
    Ok(())
}

#[test]
fn uniqueness_reports_first_repeat() -> TestResult {
    ensure(["a", "b"].has_unique_items(), "distinct items are unique")?;
    ["a", "b"].must_have_unique_items("ids")?;
    let message = violation_message(["a", "b", "b", "a"].must_have_unique_items("ids"))?;
    ensure(
        message.contains("\"b\" occurs more than once"),
        format!("unexpected message: {message}"),
    )
}

#[test]
fn sequence_prefix_and_suffix() -> TestResult {
    let path = ["usr", "local", "bin"];
    path.must_start_with_items(&["usr", "local"], "path")?;
    path.must_end_with_items(&["bin"], "path")?;
    path.must_start_with_items(&[], "path")?;
    ensure_violation(
        path.must_start_with_items(&["local"], "path"),
        GuardErrorKind::InvalidCollection,
    )?;
    ensure_violation(
        path.must_end_with_items(&["usr"], "path"),
        GuardErrorKind::InvalidCollection,
    )?;
    Ok(())
}

#[test]
fn optional_items_report_index() -> TestResult {
    let present = [Some(1_i32), Some(2)];
    ensure(!present.contains_none(), "no None items")?;
    present.must_not_contain_none("values")?;
    let holes = [Some(1_i32), None, None];
    ensure(holes.contains_none(), "None items are detected")?;
    ensure_violation(holes.must_not_contain_none("values"), GuardErrorKind::NoneItem)?;
    let message = violation_message(holes.must_not_contain_none("values"))?;
    ensure(message.contains("at index 1"), format!("unexpected message: {message}"))
}
