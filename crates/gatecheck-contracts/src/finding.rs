//! The `Finding`: one extracted candidate datum with full provenance.
//!
//! Findings are created exclusively by context extractors from one unit of
//! input text and are immutable thereafter, except for the `description`
//! annotation layered on by the check assembler (a clone-and-set operation,
//! never a mutation of the original).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key inside [`Finding::parsed_fields`] whose value names other files to
/// recursively parse.  The value may be a single string or an array of
/// strings; the parsing orchestrator normalizes both forms.
pub const REFERENCED_FILES_KEY: &str = "referenced_files";

/// One extracted candidate datum used as the unit of matching.
///
/// `value` is always a string — extractors must coerce numbers, booleans,
/// and nulls before constructing a Finding.  `parsed_fields` is always a
/// map (possibly empty), never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// The primary text used for matching.
    pub value: String,
    /// Absolute path of the file this finding came from.
    pub source_file: String,
    /// 1-based line number; `None` means "location unknown" and sorts last
    /// within its file.
    pub line_number: Option<u32>,
    /// The raw line/snippet that produced this finding (empty if synthetic).
    pub matched_content: String,
    /// Free-form structured metadata, e.g. nested tool/version info or a
    /// [`REFERENCED_FILES_KEY`] entry.
    pub parsed_fields: Map<String, Value>,
    /// Checker description attached by the assembler before reporting.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl Finding {
    /// Create a finding with no line number, empty raw content, and empty
    /// metadata.
    pub fn new(value: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source_file: source_file.into(),
            line_number: None,
            matched_content: String::new(),
            parsed_fields: Map::new(),
            description: None,
        }
    }

    /// Set the 1-based line number.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line_number = Some(line);
        self
    }

    /// Set the raw matched text.
    pub fn with_matched_content(mut self, content: impl Into<String>) -> Self {
        self.matched_content = content.into();
        self
    }

    /// Insert one metadata entry.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parsed_fields.insert(key.into(), value);
        self
    }

    /// Return a copy annotated with the checker's human-readable description.
    pub fn with_description(&self, description: &str) -> Self {
        let mut copy = self.clone();
        copy.description = Some(description.to_string());
        copy
    }
}

/// A synthetic record representing the *absence* of an expected finding.
///
/// Shaped like a [`Finding`] — null/empty placeholders for the provenance
/// fields — so downstream report handling stays uniform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostEntry {
    /// The unmet pattern, or the existence-failure sentinel.
    pub expected: String,
    /// Every file searched during the run, deduplicated and sorted.
    pub searched_files: Vec<String>,
    /// Always `None` for a ghost.
    pub line_number: Option<u32>,
    /// Always empty for a ghost.
    pub source_file: String,
    /// Always empty for a ghost.
    pub matched_content: String,
    /// Always empty for a ghost.
    pub parsed_fields: Map<String, Value>,
    /// Checker description attached by the assembler before reporting.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl GhostEntry {
    /// Build a ghost for an unmet expectation.
    pub fn new(expected: impl Into<String>, searched_files: Vec<String>) -> Self {
        Self {
            expected: expected.into(),
            searched_files,
            line_number: None,
            source_file: String::new(),
            matched_content: String::new(),
            parsed_fields: Map::new(),
            description: None,
        }
    }

    /// Return a copy annotated with the checker's human-readable description.
    pub fn with_description(&self, description: &str) -> Self {
        let mut copy = self.clone();
        copy.description = Some(description.to_string());
        copy
    }
}
