// crates/guardrail-core/src/lib.rs
// ============================================================================
// Module: Guardrail Core Root
// Description: Public API surface for the guard clause catalog.
// Purpose: Wire together the check families, error plumbing, and prelude.
// Dependencies: crate::{approximate, collection, comparable, dictionary, error,
//              macros, observer, patterns, range, render, settings, state,
//              string, throw, types, uri, value}
// ============================================================================

//! ## Overview
//! `guardrail-core` is a catalog of guard clauses: stateless checks that
//! validate arguments at the top of a function. Each family comes in two
//! forms:
//!
//! - boolean checks (`is_*`, `has_*`) that never fail;
//! - assertions (`must_*`) that return the checked value or a typed
//!   [`GuardError`] built by the [`throw`] module.
//!
//! Callers who need their own error type replace the default with
//! [`GuardResultExt::or_throw`] or [`GuardResultExt::or_throw_with`].
//!
//! ```ignore
//! use guardrail_core::prelude::*;
//!
//! fn schedule(name: &str, retries: u32) -> GuardResult<()> {
//!     name.must_not_be_white_space("name")?;
//!     retries.must_be_less_than_or_equal_to(10, "retries")?;
//!     Ok(())
//! }
//! ```

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod approximate;
pub mod collection;
pub mod comparable;
pub mod dictionary;
pub mod error;
mod macros;
pub mod observer;
pub mod patterns;
pub mod range;
mod render;
pub mod settings;
pub mod state;
pub mod string;
pub mod throw;
pub mod types;
pub mod uri;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use approximate::ApproximateGuards;
pub use collection::CollectionGuards;
pub use collection::OptionalItemGuards;
pub use comparable::ComparableGuards;
pub use dictionary::DictionaryGuards;
pub use error::GuardError;
pub use error::GuardErrorKind;
pub use error::GuardResult;
pub use observer::GuardObserver;
pub use observer::NoopObserver;
pub use observer::ObserverLevel;
pub use observer::TracingObserver;
pub use observer::install_observer;
pub use observer::is_observer_installed;
pub use range::Range;
pub use range::RangeFromInfo;
pub use settings::GuardSettings;
pub use settings::InstallError;
pub use settings::install_settings;
pub use settings::is_settings_installed;
pub use settings::settings;
pub use string::OptionalStringGuards;
pub use string::StringComparison;
pub use string::StringGuards;
pub use string::equals_with;
pub use throw::GuardResultExt;
pub use uri::UriReference;
pub use uri::UriSchemeGuards;
pub use uri::UriStrGuards;
pub use value::OptionGuards;
pub use value::ValueGuards;

// ============================================================================
// SECTION: Prelude
// ============================================================================

/// Glob-importable set of guard traits and result types.
pub mod prelude {
    pub use crate::approximate::ApproximateGuards;
    pub use crate::collection::CollectionGuards;
    pub use crate::collection::OptionalItemGuards;
    pub use crate::comparable::ComparableGuards;
    pub use crate::debug_guard;
    pub use crate::dictionary::DictionaryGuards;
    pub use crate::error::GuardError;
    pub use crate::error::GuardErrorKind;
    pub use crate::error::GuardResult;
    pub use crate::guard_argument;
    pub use crate::range::Range;
    pub use crate::string::OptionalStringGuards;
    pub use crate::string::StringComparison;
    pub use crate::string::StringGuards;
    pub use crate::throw::GuardResultExt;
    pub use crate::uri::UriSchemeGuards;
    pub use crate::uri::UriStrGuards;
    pub use crate::value::OptionGuards;
    pub use crate::value::ValueGuards;
}
