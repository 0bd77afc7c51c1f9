//! Check verdict types: the assembled result, the waived result, and the
//! violation classifications in between.
//!
//! The assembler produces a [`CheckVerdict`]; the waiver engine consumes it
//! and produces a [`FinalVerdict`].  Both stages attach annotations to
//! copies; they never mutate a finding's provenance fields.

use serde::{Deserialize, Serialize};

use crate::finding::{Finding, GhostEntry};

/// Sentinel `expected` string for a failed existence check.
pub const EXISTENCE_CHECK_FAILED: &str = "Existence check failed";

/// The overall PASS/FAIL verdict of one checker invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
        }
    }
}

/// The assembled, pre-waiver result of one checker invocation.
///
/// `extra` is only populated for pattern-based checkers; existence checkers
/// classify findings as found/missing only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckVerdict {
    pub status: CheckStatus,
    pub found: Vec<Finding>,
    pub missing: Vec<GhostEntry>,
    pub extra: Vec<Finding>,
}

/// One violation eligible for waiving: an unmet expectation or an
/// unconsumed finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    Missing(GhostEntry),
    Extra(Finding),
}

impl Violation {
    /// The identifying string waiver patterns are matched against: a ghost's
    /// `expected`, a finding's `value`.
    pub fn identifier(&self) -> &str {
        match self {
            Violation::Missing(ghost) => &ghost.expected,
            Violation::Extra(finding) => &finding.value,
        }
    }
}

/// Display tag distinguishing a normal approved waiver from the forced
/// auto-waiver global mode applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaiverTag {
    /// Matched a declared selective waiver pattern.
    Approved,
    /// Auto-waived by global (force-pass) mode.
    Forced,
}

impl WaiverTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaiverTag::Approved => "waived",
            WaiverTag::Forced => "force-waived",
        }
    }
}

/// A violation reclassified as an accepted exception.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaivedViolation {
    pub violation: Violation,
    /// The approved reason attached to this waiver.
    pub reason: String,
    /// The `waive_items` pattern that matched (absent in global mode).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub matched_pattern: Option<String>,
    pub tag: WaiverTag,
}

/// A declared waiver pattern that matched no violation across the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnusedWaiver {
    pub pattern: String,
    pub reason: String,
}

/// The post-waiver result: the check verdict plus waiver bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalVerdict {
    pub status: CheckStatus,
    pub found: Vec<Finding>,
    /// Violations that remained unwaived.
    pub missing: Vec<GhostEntry>,
    /// Unconsumed findings that remained unwaived.
    pub extra: Vec<Finding>,
    pub waived: Vec<WaivedViolation>,
    pub unused_waivers: Vec<UnusedWaiver>,
}

impl FinalVerdict {
    /// Wrap a verdict untouched, for checkers without waiver support.
    pub fn from_verdict(verdict: CheckVerdict) -> Self {
        Self {
            status: verdict.status,
            found: verdict.found,
            missing: verdict.missing,
            extra: verdict.extra,
            waived: Vec::new(),
            unused_waivers: Vec::new(),
        }
    }
}
