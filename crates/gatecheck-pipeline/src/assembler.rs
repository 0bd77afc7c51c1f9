//! The check assembler: findings plus requirements in, a pre-waiver
//! verdict out.
//!
//! Two paths exist, selected by the checker kind:
//!
//! - **Existence** — the finding list merely has to be non-empty.
//! - **Pattern** — First-Unconsumed-Match consumption: patterns are walked
//!   in order, each claiming the first not-yet-consumed finding it matches.
//!   Unmet patterns become ghosts in `missing`; findings no pattern ever
//!   claimed become `extra`.
//!
//! The matcher policy here is fixed, not configurable per call:
//! `DefaultMode::Contains`, `RegexMode::Search`.

use tracing::{debug, warn};

use gatecheck_contracts::finding::{Finding, GhostEntry};
use gatecheck_contracts::spec::{CountSpec, RequirementSpec};
use gatecheck_contracts::verdict::{CheckStatus, CheckVerdict, EXISTENCE_CHECK_FAILED};
use gatecheck_core::existence::check_existence;
use gatecheck_core::matcher::{match_value, DefaultMode, RegexMode};

/// Existence path: PASS iff any finding exists.
///
/// On failure, `missing` holds one ghost carrying the fixed sentinel
/// `"Existence check failed"` and the full searched-file list.
pub fn assemble_existence(
    findings: &[Finding],
    searched_files: &[String],
    description: &str,
) -> CheckVerdict {
    let outcome = check_existence(findings);
    debug!(is_match = outcome.is_match, reason = %outcome.reason, "existence check");

    if outcome.is_match {
        CheckVerdict {
            status: CheckStatus::Pass,
            found: outcome
                .evidence
                .iter()
                .map(|f| f.with_description(description))
                .collect(),
            missing: Vec::new(),
            extra: Vec::new(),
        }
    } else {
        let ghost = GhostEntry::new(EXISTENCE_CHECK_FAILED, searched_files.to_vec())
            .with_description(description);
        CheckVerdict {
            status: CheckStatus::Fail,
            found: Vec::new(),
            missing: vec![ghost],
            extra: Vec::new(),
        }
    }
}

/// Pattern path: First-Unconsumed-Match consumption over the stable-ordered
/// finding list.
///
/// PASS iff both `missing` and `extra` end up empty.  An empty pattern list
/// consumes nothing, so every finding lands in `extra` and the check fails.
pub fn assemble_patterns(
    findings: &[Finding],
    searched_files: &[String],
    requirement: &RequirementSpec,
    description: &str,
) -> CheckVerdict {
    // Count/list mismatch is sloppy configuration worth flagging, but the
    // pattern list is authoritative — log, don't crash.
    if let CountSpec::Count(declared) = requirement.requirement_count {
        if declared != requirement.pattern_items.len() {
            warn!(
                declared,
                actual = requirement.pattern_items.len(),
                "requirement_count does not match pattern_items length"
            );
        }
    }

    let mut consumed = vec![false; findings.len()];
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for pattern in &requirement.pattern_items {
        let hit = findings.iter().enumerate().find(|(i, finding)| {
            !consumed[*i]
                && match_value(
                    &finding.value,
                    pattern,
                    DefaultMode::Contains,
                    RegexMode::Search,
                )
                .is_match
        });

        match hit {
            Some((i, finding)) => {
                consumed[i] = true;
                debug!(pattern = %pattern, value = %finding.value, "pattern satisfied");
                found.push(finding.with_description(description));
            }
            None => {
                debug!(pattern = %pattern, "pattern unmet");
                missing.push(
                    GhostEntry::new(pattern.clone(), searched_files.to_vec())
                        .with_description(description),
                );
            }
        }
    }

    let extra: Vec<Finding> = findings
        .iter()
        .enumerate()
        .filter(|(i, _)| !consumed[*i])
        .map(|(_, finding)| finding.with_description(description))
        .collect();

    let status = if missing.is_empty() && extra.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    CheckVerdict {
        status,
        found,
        missing,
        extra,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
