//! Report formatters: human-readable log text and machine-readable JSON.
//!
//! The formatters consume projected [`CheckReport`]s — they add nothing to
//! the verdicts, they only lay them out.  A checker that could not run at
//! all renders with the distinct `CONFIG_ERROR` status so downstream
//! tooling can tell "ran and found violations" from "could not run".

use std::fmt::Write as _;

use chrono::Utc;
use serde::Serialize;

use gatecheck_contracts::verdict::{CheckStatus, Violation};
use gatecheck_pipeline::report::CheckReport;

/// The outcome of attempting one checker invocation.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    Completed(CheckReport),
    ConfigFailure(ConfigFailure),
}

/// A checker that could not run at all.
#[derive(Debug, Serialize)]
pub struct ConfigFailure {
    pub name: String,
    pub status: &'static str,
    pub reason: String,
}

impl ConfigFailure {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "CONFIG_ERROR",
            reason: reason.into(),
        }
    }
}

impl CheckOutcome {
    /// True only for a completed, passing check.
    pub fn passed(&self) -> bool {
        matches!(
            self,
            CheckOutcome::Completed(report) if report.status == CheckStatus::Pass
        )
    }
}

/// Render all outcomes as a human-readable report.
pub fn render_log(outcomes: &[CheckOutcome]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "GATECHECK sign-off report — {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(out, "{}", "=".repeat(60));

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut config_errors = 0usize;

    for outcome in outcomes {
        match outcome {
            CheckOutcome::Completed(report) => {
                match report.status {
                    CheckStatus::Pass => passed += 1,
                    CheckStatus::Fail => failed += 1,
                }
                render_report(&mut out, report);
            }
            CheckOutcome::ConfigFailure(failure) => {
                config_errors += 1;
                let _ = writeln!(out, "[CONFIG_ERROR] {} — {}", failure.name, failure.reason);
            }
        }
    }

    let _ = writeln!(out, "{}", "-".repeat(60));
    let _ = writeln!(
        out,
        "Summary: {passed} passed, {failed} failed, {config_errors} configuration error(s)"
    );
    out
}

fn render_report(out: &mut String, report: &CheckReport) {
    let _ = writeln!(
        out,
        "[{}] {} — {}",
        report.status.as_str(),
        report.name,
        report.description
    );

    if !report.found.is_empty() {
        let _ = writeln!(out, "    found ({}):", report.found.len());
        for finding in &report.found {
            let line = finding
                .line_number
                .map(|l| l.to_string())
                .unwrap_or_else(|| "?".to_string());
            let _ = writeln!(out, "      {}:{}  {}", finding.source_file, line, finding.value);
        }
    }

    if !report.missing.is_empty() {
        let _ = writeln!(out, "    missing ({}):", report.missing.len());
        for ghost in &report.missing {
            let _ = writeln!(
                out,
                "      expected '{}' (searched {} file(s))",
                ghost.expected,
                ghost.searched_files.len()
            );
        }
    }

    if let Some(extra) = &report.extra {
        if !extra.is_empty() {
            let _ = writeln!(out, "    extra ({}):", extra.len());
            for finding in extra {
                let line = finding
                    .line_number
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "?".to_string());
                let _ =
                    writeln!(out, "      {}:{}  {}", finding.source_file, line, finding.value);
            }
        }
    }

    if let Some(waived) = &report.waived {
        if !waived.is_empty() {
            let _ = writeln!(out, "    waived ({}):", waived.len());
            for w in waived {
                let identifier = match &w.violation {
                    Violation::Missing(ghost) => ghost.expected.as_str(),
                    Violation::Extra(finding) => finding.value.as_str(),
                };
                let matched = w
                    .matched_pattern
                    .as_deref()
                    .map(|p| format!(" (matched '{p}')"))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "      [{}] '{}' — {}{}",
                    w.tag.as_str(),
                    identifier,
                    w.reason,
                    matched
                );
            }
        }
    }

    if let Some(unused) = &report.unused_waivers {
        if !unused.is_empty() {
            let _ = writeln!(out, "    unused waivers ({}):", unused.len());
            for u in unused {
                let _ = writeln!(out, "      '{}' — {}", u.pattern, u.reason);
            }
        }
    }
}

/// Render all outcomes as pretty-printed JSON.
pub fn render_json(outcomes: &[CheckOutcome]) -> String {
    // CheckOutcome serialization cannot fail: no non-string map keys, no
    // non-serializable types.
    serde_json::to_string_pretty(outcomes).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
