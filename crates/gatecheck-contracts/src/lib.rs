//! # gatecheck-contracts
//!
//! Shared types, specs, and error contracts for the GATECHECK sign-off
//! checking pipeline.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions, spec validation, and error types.

pub mod checker;
pub mod error;
pub mod finding;
pub mod spec;
pub mod verdict;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::checker::CheckerKind;
    use crate::error::GatecheckError;
    use crate::finding::{Finding, GhostEntry};
    use crate::spec::{CountSpec, RequirementSpec, WaiverMode, WaiverSpec};
    use crate::verdict::{CheckStatus, Violation};

    // ── CountSpec serde ──────────────────────────────────────────────────────

    #[test]
    fn count_spec_accepts_na_and_integers() {
        let na: CountSpec = serde_json::from_value(json!("N/A")).unwrap();
        assert_eq!(na, CountSpec::NotApplicable);

        let zero: CountSpec = serde_json::from_value(json!(0)).unwrap();
        assert_eq!(zero, CountSpec::Count(0));

        let three: CountSpec = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(three, CountSpec::Count(3));
    }

    #[test]
    fn count_spec_rejects_unrecognized_values() {
        // An unrecognized requirement value is a configuration error, so
        // deserialization must refuse it rather than default it.
        assert!(serde_json::from_value::<CountSpec>(json!("n/a")).is_err());
        assert!(serde_json::from_value::<CountSpec>(json!("five")).is_err());
        assert!(serde_json::from_value::<CountSpec>(json!(-1)).is_err());
    }

    #[test]
    fn count_spec_serializes_back_to_na_or_number() {
        assert_eq!(
            serde_json::to_value(CountSpec::NotApplicable).unwrap(),
            json!("N/A")
        );
        assert_eq!(serde_json::to_value(CountSpec::Count(2)).unwrap(), json!(2));
    }

    // ── WaiverSpec modes and validation ──────────────────────────────────────

    #[test]
    fn waiver_mode_follows_count() {
        assert_eq!(WaiverSpec::not_applicable().mode(), WaiverMode::NotApplicable);
        assert_eq!(WaiverSpec::global("any").mode(), WaiverMode::Global);
        assert_eq!(
            WaiverSpec::selective(vec!["x".into()], vec!["r".into()]).mode(),
            WaiverMode::Selective
        );
    }

    /// A selective-mode spec with mismatched item/reason lengths is a
    /// configuration error, surfaced, not silently tolerated.
    #[test]
    fn selective_waiver_length_mismatch_is_config_error() {
        let spec = WaiverSpec {
            waiver_count: CountSpec::Count(2),
            waive_items: vec!["a".into(), "b".into()],
            waive_reasons: vec!["only one reason".into()],
        };

        match spec.validate() {
            Err(GatecheckError::Config { reason }) => {
                assert!(reason.contains("waive_reasons"), "unexpected reason: {reason}");
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    /// Global mode never matches items against violations, so alignment is
    /// not enforced there.
    #[test]
    fn global_waiver_tolerates_commentary_items() {
        let spec = WaiverSpec {
            waiver_count: CountSpec::Count(0),
            waive_items: vec!["commentary".into()],
            waive_reasons: vec![],
        };
        assert!(spec.validate().is_ok());
    }

    // ── CheckerKind derivation ───────────────────────────────────────────────

    #[test]
    fn checker_kind_derivation_covers_all_four_combinations() {
        let patterns = RequirementSpec::patterns(vec!["Innovus".into()]);
        let existence = RequirementSpec::not_applicable();
        let waiverable = WaiverSpec::global("ok");
        let strict = WaiverSpec::not_applicable();

        assert_eq!(
            CheckerKind::derive(&patterns, &waiverable),
            CheckerKind::PatternWaiverable
        );
        assert_eq!(CheckerKind::derive(&patterns, &strict), CheckerKind::PatternStrict);
        assert_eq!(
            CheckerKind::derive(&existence, &waiverable),
            CheckerKind::ExistenceWaiverable
        );
        assert_eq!(
            CheckerKind::derive(&existence, &strict),
            CheckerKind::ExistenceStrict
        );
    }

    #[test]
    fn checker_kind_flags() {
        assert!(CheckerKind::PatternStrict.is_pattern_based());
        assert!(!CheckerKind::PatternStrict.is_waiver_aware());
        assert!(CheckerKind::ExistenceWaiverable.is_waiver_aware());
        assert!(!CheckerKind::ExistenceWaiverable.is_pattern_based());
    }

    // ── Finding annotation semantics ─────────────────────────────────────────

    /// `with_description` must be a copy-and-add, leaving the original
    /// untouched.
    #[test]
    fn description_annotation_does_not_mutate_original() {
        let original = Finding::new("Innovus 21.10", "/work/design.log").with_line(3);
        let annotated = original.with_description("tool version check");

        assert!(original.description.is_none());
        assert_eq!(annotated.description.as_deref(), Some("tool version check"));
        assert_eq!(annotated.value, original.value);
        assert_eq!(annotated.line_number, original.line_number);
    }

    // ── GhostEntry shape ─────────────────────────────────────────────────────

    /// A ghost carries the same field shape as a finding, with null/empty
    /// placeholders, so report handling stays uniform.
    #[test]
    fn ghost_entry_uses_empty_placeholders() {
        let ghost = GhostEntry::new("DesignCompiler", vec!["/work/design.log".into()]);

        assert_eq!(ghost.expected, "DesignCompiler");
        assert_eq!(ghost.line_number, None);
        assert_eq!(ghost.source_file, "");
        assert_eq!(ghost.matched_content, "");
        assert!(ghost.parsed_fields.is_empty());
    }

    // ── Violation identifiers ────────────────────────────────────────────────

    #[test]
    fn violation_identifier_picks_expected_or_value() {
        let ghost = Violation::Missing(GhostEntry::new("missing-pattern", vec![]));
        assert_eq!(ghost.identifier(), "missing-pattern");

        let extra = Violation::Extra(Finding::new("stray line", "/a.log"));
        assert_eq!(extra.identifier(), "stray line");
    }

    // ── Status and error display ─────────────────────────────────────────────

    #[test]
    fn check_status_serializes_uppercase() {
        assert_eq!(serde_json::to_value(CheckStatus::Pass).unwrap(), json!("PASS"));
        assert_eq!(serde_json::to_value(CheckStatus::Fail).unwrap(), json!("FAIL"));
    }

    #[test]
    fn error_display_messages() {
        let config = GatecheckError::Config {
            reason: "no readable input".to_string(),
        };
        assert!(config.to_string().contains("configuration error"));
        assert!(config.to_string().contains("no readable input"));

        let access = GatecheckError::FileAccess {
            path: "/work/missing.log".to_string(),
            reason: "not found".to_string(),
        };
        assert!(access.to_string().contains("/work/missing.log"));
        assert!(access.to_string().contains("not found"));
    }
}
