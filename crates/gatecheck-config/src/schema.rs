//! Declarative configuration schema.
//!
//! A `ConfigFile` is deserialized from TOML: an optional `[vars]` table of
//! path-variable definitions and an ordered list of `[[checkers]]` blocks.
//! Checkers run in declaration order.
//!
//! Example:
//! ```toml
//! [vars]
//! log_dir = "/work/chip/logs"
//!
//! [[checkers]]
//! name = "tool-version"
//! description = "Sign-off tool version check"
//! input_files = ["${log_dir}/design.log"]
//! requirement_count = 1
//! pattern_items = ["Innovus"]
//! waiver_count = "N/A"
//!
//! [checkers.extractor]
//! kind = "regex"
//! value_pattern = "Generator: (.+)$"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gatecheck_contracts::spec::CountSpec;

/// The top-level structure deserialized from a TOML configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Path-variable definitions substituted into `input_files` entries.
    #[serde(default)]
    pub vars: BTreeMap<String, String>,

    /// Ordered list of checkers; run in declaration order.
    #[serde(default)]
    pub checkers: Vec<CheckerConfig>,
}

/// One `[[checkers]]` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Stable identifier used in reports and log lines.
    pub name: String,

    /// Human-readable description attached to every reported item.
    pub description: String,

    /// Root input files.  `${var}` placeholders are resolved from `[vars]`;
    /// relative paths are resolved against the config file's directory.
    pub input_files: Vec<String>,

    /// `"N/A"` for existence-based checkers, an integer for pattern-based
    /// ones (conventionally `pattern_items.len()`).
    pub requirement_count: CountSpec,

    #[serde(default)]
    pub pattern_items: Vec<String>,

    /// `"N/A"` (no waiver support), `0` (global force-pass), or the number
    /// of selective waive items.
    pub waiver_count: CountSpec,

    #[serde(default)]
    pub waive_items: Vec<String>,

    #[serde(default)]
    pub waive_reasons: Vec<String>,

    /// Which context extractor parses this checker's inputs.
    pub extractor: ExtractorConfig,
}

/// Extractor selection for one checker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ExtractorConfig {
    /// Every non-blank line is a candidate finding.
    Lines,
    /// A value pattern selects candidates; an optional reference pattern
    /// marks indirect file references to follow.
    Regex {
        value_pattern: String,
        #[serde(default)]
        reference_pattern: Option<String>,
    },
}
