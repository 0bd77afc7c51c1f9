//! The output controller: trim a final verdict down to the fields relevant
//! for the checker's kind.
//!
//! Purely a projection — fields are dropped, never added or rewritten.
//! Existence checkers have no `extra` classification; waiver-unaware
//! checkers carry no waiver bookkeeping.  Absent fields serialize away
//! entirely so the external formatters see only what the kind defines.

use serde::{Deserialize, Serialize};

use gatecheck_contracts::checker::CheckerKind;
use gatecheck_contracts::finding::{Finding, GhostEntry};
use gatecheck_contracts::verdict::{CheckStatus, FinalVerdict, UnusedWaiver, WaivedViolation};

/// The projected, formatter-facing result of one checker invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckReport {
    pub name: String,
    pub description: String,
    pub kind: CheckerKind,
    pub status: CheckStatus,
    pub found: Vec<Finding>,
    pub missing: Vec<GhostEntry>,
    /// Pattern-based kinds only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extra: Option<Vec<Finding>>,
    /// Waiver-aware kinds only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub waived: Option<Vec<WaivedViolation>>,
    /// Waiver-aware kinds only.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub unused_waivers: Option<Vec<UnusedWaiver>>,
}

/// Project `verdict` onto the fields `kind` defines.
pub fn project(
    name: &str,
    description: &str,
    kind: CheckerKind,
    verdict: FinalVerdict,
) -> CheckReport {
    CheckReport {
        name: name.to_string(),
        description: description.to_string(),
        kind,
        status: verdict.status,
        found: verdict.found,
        missing: verdict.missing,
        extra: kind.is_pattern_based().then_some(verdict.extra),
        waived: kind.is_waiver_aware().then_some(verdict.waived),
        unused_waivers: kind.is_waiver_aware().then_some(verdict.unused_waivers),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
