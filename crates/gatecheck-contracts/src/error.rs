//! Error types for the GATECHECK evaluation pipeline.
//!
//! Only two conditions are allowed to fail a checker invocation: a malformed
//! declarative specification (a setup mistake the operator must fix) and an
//! unreadable input file.  Everything data-dependent — bad regexes in
//! patterns, empty pattern lists, missing metadata keys — degrades to a
//! well-defined non-match or empty result and never raises.

use thiserror::Error;

/// The unified error type for the GATECHECK crates.
#[derive(Debug, Error)]
pub enum GatecheckError {
    /// A requirement or waiver specification is malformed, or a checker has
    /// no readable root input at all.  Fatal for that single checker
    /// invocation only; surfaced immediately, never silently defaulted.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// An input file could not be read (missing, permission, decode).
    ///
    /// For root inputs the runner converts this into a configuration-level
    /// failure; for indirectly referenced files the orchestrator skips the
    /// branch and continues.
    #[error("cannot read '{path}': {reason}")]
    FileAccess { path: String, reason: String },
}

/// Convenience alias used throughout the GATECHECK crates.
pub type GatecheckResult<T> = Result<T, GatecheckError>;
