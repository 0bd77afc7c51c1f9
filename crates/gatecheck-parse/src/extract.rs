//! Built-in context extractors.
//!
//! Each checker supplies extraction logic behind the `ContextExtractor`
//! trait; these two cover the common cases declaratively so most checkers
//! need no custom code:
//!
//! - [`LineExtractor`] — every non-blank line is a candidate finding.
//! - [`RegexExtractor`] — a value pattern selects and captures candidates;
//!   an optional reference pattern marks lines that point at further files
//!   to parse.
//!
//! Extractors are pure: same `(text, source)` in, same findings out, no I/O,
//! and no filtering by what the checker's requirements happen to be.

use regex::Regex;
use serde_json::Value;

use gatecheck_contracts::error::{GatecheckError, GatecheckResult};
use gatecheck_contracts::finding::{Finding, REFERENCED_FILES_KEY};
use gatecheck_core::traits::ContextExtractor;

/// Emit one finding per non-blank line: the trimmed line as `value`, the raw
/// line as `matched_content`, 1-based line numbers.
#[derive(Debug, Default)]
pub struct LineExtractor;

impl LineExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl ContextExtractor for LineExtractor {
    fn extract(&self, text: &str, source: &str) -> Vec<Finding> {
        text.lines()
            .enumerate()
            .filter(|(_, raw)| !raw.trim().is_empty())
            .map(|(idx, raw)| {
                Finding::new(raw.trim(), source)
                    .with_line((idx + 1) as u32)
                    .with_matched_content(raw)
            })
            .collect()
    }
}

/// Emit findings for lines matching a value pattern, and mark indirect file
/// references for lines matching an optional reference pattern.
///
/// For both patterns, capture group 1 (when present) supplies the extracted
/// string; otherwise the whole match does.  A reference line's finding
/// carries the target path under `parsed_fields["referenced_files"]` so the
/// parsing orchestrator can follow it.
#[derive(Debug)]
pub struct RegexExtractor {
    value_pattern: Regex,
    reference_pattern: Option<Regex>,
}

impl RegexExtractor {
    /// Compile the extractor's patterns.
    ///
    /// Extractor patterns are part of the declarative checker configuration,
    /// so an uncompilable pattern is `GatecheckError::Config` — fail fast at
    /// load time, unlike requirement patterns which degrade at match time.
    pub fn new(value_pattern: &str, reference_pattern: Option<&str>) -> GatecheckResult<Self> {
        let compile = |which: &str, raw: &str| {
            Regex::new(raw).map_err(|e| GatecheckError::Config {
                reason: format!("invalid {which} pattern '{raw}': {e}"),
            })
        };

        Ok(Self {
            value_pattern: compile("extractor value", value_pattern)?,
            reference_pattern: reference_pattern
                .map(|raw| compile("extractor reference", raw))
                .transpose()?,
        })
    }

    fn captured<'t>(caps: &regex::Captures<'t>) -> &'t str {
        caps.get(1).unwrap_or_else(|| caps.get(0).unwrap()).as_str()
    }
}

impl ContextExtractor for RegexExtractor {
    fn extract(&self, text: &str, source: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = (idx + 1) as u32;

            if let Some(caps) = self.value_pattern.captures(raw) {
                findings.push(
                    Finding::new(Self::captured(&caps), source)
                        .with_line(line)
                        .with_matched_content(raw),
                );
            }

            if let Some(reference) = &self.reference_pattern {
                if let Some(caps) = reference.captures(raw) {
                    let target = Self::captured(&caps);
                    findings.push(
                        Finding::new(target, source)
                            .with_line(line)
                            .with_matched_content(raw)
                            .with_field(REFERENCED_FILES_KEY, Value::String(target.to_string())),
                    );
                }
            }
        }

        findings
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_extractor_skips_blank_lines() {
        let text = "first line\n\n   \nsecond line\n";
        let findings = LineExtractor::new().extract(text, "/work/a.log");

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].value, "first line");
        assert_eq!(findings[0].line_number, Some(1));
        assert_eq!(findings[1].value, "second line");
        assert_eq!(findings[1].line_number, Some(4));
    }

    #[test]
    fn regex_extractor_uses_first_capture_group() {
        let extractor = RegexExtractor::new(r"Generator: (.+)$", None).unwrap();
        let text = "// Generator: Cadence Innovus 21.10-s080_1\nunrelated line\n";

        let findings = extractor.extract(text, "/work/design.log");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].value, "Cadence Innovus 21.10-s080_1");
        assert_eq!(findings[0].line_number, Some(1));
        assert_eq!(findings[0].matched_content, "// Generator: Cadence Innovus 21.10-s080_1");
    }

    /// Reference lines produce findings carrying the referenced path in
    /// `parsed_fields`, which the orchestrator follows.
    #[test]
    fn regex_extractor_marks_references() {
        let extractor =
            RegexExtractor::new(r"^tool: (.+)$", Some(r"^INCLUDE (\S+)$")).unwrap();
        let text = "tool: innovus\nINCLUDE sub/child.log\n";

        let findings = extractor.extract(text, "/work/top.log");
        assert_eq!(findings.len(), 2);
        assert!(findings[0].parsed_fields.is_empty());
        assert_eq!(
            findings[1].parsed_fields.get(REFERENCED_FILES_KEY),
            Some(&serde_json::json!("sub/child.log"))
        );
    }

    #[test]
    fn bad_extractor_pattern_is_a_config_error() {
        match RegexExtractor::new("[", None) {
            Err(GatecheckError::Config { reason }) => {
                assert!(reason.contains("extractor value"), "unexpected reason: {reason}");
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    /// Extraction is a pure function: identical input, element-wise
    /// identical output.
    #[test]
    fn extraction_is_idempotent() {
        let extractor = RegexExtractor::new(r"slack (-?\d+\.\d+)", None).unwrap();
        let text = "worst slack -0.123 ns\nslack 0.456 met\n";

        let first = extractor.extract(text, "/work/timing.rpt");
        let second = extractor.extract(text, "/work/timing.rpt");
        assert_eq!(first, second);
    }
}
