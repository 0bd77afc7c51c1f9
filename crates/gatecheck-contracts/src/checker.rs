//! The closed set of checker kinds.
//!
//! A checker is one of four fixed combinations of
//! {pattern-based, existence-based} × {waiver-aware, strict}.  The kind is
//! derived once at configuration-validation time from the two count specs
//! and carried through the pipeline — never re-inferred per stage.

use serde::{Deserialize, Serialize};

use crate::spec::{CountSpec, RequirementSpec, WaiverSpec};

/// The four checker kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckerKind {
    /// Pattern list with waiver support.
    PatternWaiverable,
    /// Pattern list, no waiver support.
    PatternStrict,
    /// Existence only, with waiver support.
    ExistenceWaiverable,
    /// Existence only, no waiver support.
    ExistenceStrict,
}

impl CheckerKind {
    /// Derive the kind from the validated specs: a checker is pattern-based
    /// iff its requirement count is an integer, and waiver-aware iff its
    /// waiver count is an integer.
    pub fn derive(requirement: &RequirementSpec, waiver: &WaiverSpec) -> Self {
        let pattern_based = requirement.requirement_count != CountSpec::NotApplicable;
        let waiver_aware = waiver.waiver_count != CountSpec::NotApplicable;
        match (pattern_based, waiver_aware) {
            (true, true) => CheckerKind::PatternWaiverable,
            (true, false) => CheckerKind::PatternStrict,
            (false, true) => CheckerKind::ExistenceWaiverable,
            (false, false) => CheckerKind::ExistenceStrict,
        }
    }

    /// True for the two kinds that classify findings against a pattern list.
    pub fn is_pattern_based(&self) -> bool {
        matches!(self, CheckerKind::PatternWaiverable | CheckerKind::PatternStrict)
    }

    /// True for the two kinds that run violations through the waiver engine.
    pub fn is_waiver_aware(&self) -> bool {
        matches!(
            self,
            CheckerKind::PatternWaiverable | CheckerKind::ExistenceWaiverable
        )
    }
}
