// crates/guardrail-core/src/observer.rs
// ============================================================================
// Module: Guard Observer
// Description: Observability hooks for guard clause violations.
// Purpose: Report every violation to a pluggable sink without hard deps.
// Dependencies: crate::error, crate::settings, tracing
// ============================================================================

//! ## Overview
//! Every error produced by the `throw` module is passed to the installed
//! [`GuardObserver`] once. The default sink discards events; the
//! [`TracingObserver`] emits structured `tracing` events so violations show up
//! in whatever subscriber the host application configured.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use serde::Deserialize;
use serde::Serialize;

use crate::error::GuardError;
use crate::settings::InstallError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Target used for violation events.
pub const TRACING_TARGET: &str = "guardrail";

/// Installed observer, set at most once per process.
static OBSERVER: OnceLock<Box<dyn GuardObserver>> = OnceLock::new();

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Sink for guard violations.
pub trait GuardObserver: Send + Sync {
    /// Records a violation.
    fn on_violation(&self, error: &GuardError);
}

/// No-op observer.
///
/// # Invariants
/// - Violations are intentionally discarded.
pub struct NoopObserver;

impl GuardObserver for NoopObserver {
    fn on_violation(&self, _error: &GuardError) {}
}

// ============================================================================
// SECTION: Tracing Observer
// ============================================================================

/// Severity used when emitting violation events.
///
/// # Invariants
/// - Variants are stable for config parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObserverLevel {
    /// `TRACE` level.
    Trace,
    /// `DEBUG` level.
    #[default]
    Debug,
    /// `INFO` level.
    Info,
    /// `WARN` level.
    Warn,
    /// `ERROR` level.
    Error,
}

impl ObserverLevel {
    /// Returns a stable label for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Observer emitting one `tracing` event per violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    /// Event severity.
    level: ObserverLevel,
}

impl TracingObserver {
    /// Creates a tracing observer emitting at `level`.
    #[must_use]
    pub const fn new(level: ObserverLevel) -> Self {
        Self {
            level,
        }
    }

    /// Returns the configured severity.
    #[must_use]
    pub const fn level(&self) -> ObserverLevel {
        self.level
    }
}

impl GuardObserver for TracingObserver {
    fn on_violation(&self, error: &GuardError) {
        let kind = error.kind().as_str();
        let parameter = error.parameter().unwrap_or("");
        let detail = error.message();
        match self.level {
            ObserverLevel::Trace => {
                tracing::trace!(target: TRACING_TARGET, kind, parameter, detail, "guard violated");
            }
            ObserverLevel::Debug => {
                tracing::debug!(target: TRACING_TARGET, kind, parameter, detail, "guard violated");
            }
            ObserverLevel::Info => {
                tracing::info!(target: TRACING_TARGET, kind, parameter, detail, "guard violated");
            }
            ObserverLevel::Warn => {
                tracing::warn!(target: TRACING_TARGET, kind, parameter, detail, "guard violated");
            }
            ObserverLevel::Error => {
                tracing::error!(target: TRACING_TARGET, kind, parameter, detail, "guard violated");
            }
        }
    }
}

// ============================================================================
// SECTION: Installation
// ============================================================================

/// Installs the process-wide observer.
///
/// # Errors
///
/// Returns [`InstallError::ObserverAlreadyInstalled`] when an observer was
/// installed before.
pub fn install_observer(observer: Box<dyn GuardObserver>) -> Result<(), InstallError> {
    OBSERVER.set(observer).map_err(|_| InstallError::ObserverAlreadyInstalled)
}

/// Returns true once an observer has been installed.
#[must_use]
pub fn is_observer_installed() -> bool {
    OBSERVER.get().is_some()
}

/// Reports a violation to the installed observer, if any.
pub(crate) fn notify(error: &GuardError) {
    if let Some(observer) = OBSERVER.get() {
        observer.on_violation(error);
    }
}
