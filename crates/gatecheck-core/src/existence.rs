//! The existence evaluator: does any candidate finding exist at all?
//!
//! Used by the two existence-based checker kinds.  The input findings pass
//! through as evidence — a value-equal clone, so downstream annotation never
//! touches the caller's list.

use gatecheck_contracts::finding::Finding;

/// The verdict of one existence evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistenceOutcome {
    pub is_match: bool,
    pub reason: String,
    /// The input findings, unmodified.
    pub evidence: Vec<Finding>,
}

/// Report whether any candidate findings exist, passing them through as
/// evidence.
pub fn check_existence(items: &[Finding]) -> ExistenceOutcome {
    let is_match = !items.is_empty();
    let reason = if is_match {
        format!("{} finding(s) present", items.len())
    } else {
        "no findings present".to_string()
    };
    ExistenceOutcome {
        is_match,
        reason,
        evidence: items.to_vec(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_does_not_match() {
        let outcome = check_existence(&[]);
        assert!(!outcome.is_match);
        assert!(outcome.evidence.is_empty());
    }

    /// Evidence is exactly the input list, element-wise equal.
    #[test]
    fn evidence_passes_through_unmodified() {
        let items = vec![
            Finding::new("line one", "/work/a.log").with_line(1),
            Finding::new("line two", "/work/a.log").with_line(2),
        ];

        let outcome = check_existence(&items);
        assert!(outcome.is_match);
        assert_eq!(outcome.evidence, items);
    }
}
