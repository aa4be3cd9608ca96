// crates/guardrail-config/src/lib.rs
// ============================================================================
// Module: Guardrail Config Library
// Description: Config model, validation, and installation for guardrail-core.
// Purpose: Single source of truth for guardrail.toml semantics.
// Dependencies: guardrail-core, serde, toml
// ============================================================================

//! ## Overview
//! `guardrail-config` loads `guardrail.toml`, validates it fail-closed, and
//! installs the resulting settings and violation observer into
//! `guardrail-core`. Installation happens at most once per process.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
