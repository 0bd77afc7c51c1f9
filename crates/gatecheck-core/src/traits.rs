//! Trait seams for the GATECHECK pipeline.
//!
//! Two collaborators are abstracted behind traits:
//!
//! - `ContextExtractor` — per-checker extraction logic (pure, no I/O)
//! - `FileReader`       — the only side-effecting collaborator in the core
//!
//! The parsing orchestrator takes both; tests substitute in-memory fakes.

use std::path::Path;

use gatecheck_contracts::error::GatecheckResult;
use gatecheck_contracts::finding::Finding;

/// Per-checker extraction logic: raw text in, candidate findings out.
///
/// Implementations must be pure functions of `(text, source)` — no file I/O,
/// no network, no global mutable state — and must NOT filter candidates by
/// what the checker's requirements or waivers are; that classification
/// belongs to the assembler.  Every returned finding's `value` is a string
/// (coerce before constructing) and `parsed_fields` defaults to empty.
pub trait ContextExtractor: Send + Sync {
    /// Extract every candidate finding from `text`.
    ///
    /// `source` is the identifier recorded as each finding's `source_file`;
    /// the extractor never opens it.
    fn extract(&self, text: &str, source: &str) -> Vec<Finding>;
}

/// The file-reading collaborator.
///
/// Implementations must transparently decompress common compressed
/// extensions (`.gz`) before returning text, and fail with
/// `GatecheckError::FileAccess` when the path is missing, unreadable, or
/// undecodable.
pub trait FileReader: Send + Sync {
    fn read_text(&self, path: &Path) -> GatecheckResult<String>;
}
