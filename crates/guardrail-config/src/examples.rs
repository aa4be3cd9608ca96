// crates/guardrail-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example guardrail.toml content.
// Purpose: Provide a documented starting point that always validates.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The example lists every section with its default value, except the
//! observer, which is switched to `tracing` to show the non-default form.

/// Returns a commented example `guardrail.toml`.
#[must_use]
pub fn config_toml_example() -> String {
    r#"# guardrail.toml

[comparison]
# Tolerance used by approximate comparisons without an explicit tolerance.
# Must be finite, greater than zero, and at most 1.0.
default_tolerance = 0.0001

[messages]
# Characters rendered per value in violation messages (16..=65536).
max_rendered_chars = 256
# Collection items rendered per violation message (1..=4096).
max_rendered_items = 16

[observer]
# "none" or "tracing".
mode = "tracing"
# trace | debug | info | warn | error
level = "warn"
"#
    .to_string()
}
