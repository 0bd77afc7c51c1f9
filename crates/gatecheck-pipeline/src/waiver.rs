//! The waiver engine: reclassify violations as accepted exceptions.
//!
//! Operates only on the `missing`/`extra` entries of an assembled verdict.
//! Three modes, selected by the waiver count:
//!
//! - **N/A** — the verdict passes through untouched.
//! - **Global** (`waiver_count == 0`) — every violation is force-waived with
//!   the single configured reason, and the final status is unconditionally
//!   PASS.  Declared items are commentary; `unused_waivers` stays empty.
//! - **Selective** (`waiver_count > 0`) — each violation's identifying
//!   string is run through the same fixed-precedence matcher as the
//!   assembler (exact equality being the trivial default case); the first
//!   matching item wins and its index-aligned reason is attached.  Items
//!   that never matched anything are reported once in `unused_waivers`.

use tracing::{debug, info};

use gatecheck_contracts::error::GatecheckResult;
use gatecheck_contracts::spec::{WaiverMode, WaiverSpec};
use gatecheck_contracts::verdict::{
    CheckStatus, CheckVerdict, FinalVerdict, UnusedWaiver, Violation, WaivedViolation, WaiverTag,
};
use gatecheck_core::matcher::{match_value, DefaultMode, RegexMode};

/// Apply the waiver policy to an assembled verdict.
///
/// Fails with `GatecheckError::Config` when a selective spec violates the
/// item/reason alignment invariant.
pub fn apply_waivers(verdict: CheckVerdict, waiver: &WaiverSpec) -> GatecheckResult<FinalVerdict> {
    waiver.validate()?;

    match waiver.mode() {
        WaiverMode::NotApplicable => Ok(FinalVerdict::from_verdict(verdict)),
        WaiverMode::Global => Ok(apply_global(verdict, waiver)),
        WaiverMode::Selective => Ok(apply_selective(verdict, waiver)),
    }
}

/// Global mode: every violation is moved to `waived` under the forced tag
/// and the status is overridden to PASS.
fn apply_global(verdict: CheckVerdict, waiver: &WaiverSpec) -> FinalVerdict {
    let reason = waiver.waive_reasons.first().cloned().unwrap_or_default();

    let mut waived = Vec::new();
    for ghost in verdict.missing {
        waived.push(WaivedViolation {
            violation: Violation::Missing(ghost),
            reason: reason.clone(),
            matched_pattern: None,
            tag: WaiverTag::Forced,
        });
    }
    for finding in verdict.extra {
        waived.push(WaivedViolation {
            violation: Violation::Extra(finding),
            reason: reason.clone(),
            matched_pattern: None,
            tag: WaiverTag::Forced,
        });
    }

    if !waived.is_empty() {
        info!(count = waived.len(), "global waiver forced all violations to PASS");
    }

    FinalVerdict {
        status: CheckStatus::Pass,
        found: verdict.found,
        missing: Vec::new(),
        extra: Vec::new(),
        waived,
        unused_waivers: Vec::new(),
    }
}

/// Selective mode: first matching `waive_items` entry wins per violation.
fn apply_selective(verdict: CheckVerdict, waiver: &WaiverSpec) -> FinalVerdict {
    let mut used = vec![false; waiver.waive_items.len()];
    let mut waived = Vec::new();

    let mut try_waive = |violation: Violation| -> Option<Violation> {
        for (i, item) in waiver.waive_items.iter().enumerate() {
            let outcome = match_value(
                violation.identifier(),
                item,
                DefaultMode::Exact,
                RegexMode::Search,
            );
            if outcome.is_match {
                debug!(
                    identifier = %violation.identifier(),
                    pattern = %item,
                    kind = outcome.kind.as_str(),
                    "violation waived"
                );
                used[i] = true;
                waived.push(WaivedViolation {
                    violation,
                    reason: waiver.waive_reasons[i].clone(),
                    matched_pattern: Some(item.clone()),
                    tag: WaiverTag::Approved,
                });
                return None;
            }
        }
        Some(violation)
    };

    let mut missing = Vec::new();
    for ghost in verdict.missing {
        if let Some(Violation::Missing(ghost)) = try_waive(Violation::Missing(ghost)) {
            missing.push(ghost);
        }
    }

    let mut extra = Vec::new();
    for finding in verdict.extra {
        if let Some(Violation::Extra(finding)) = try_waive(Violation::Extra(finding)) {
            extra.push(finding);
        }
    }

    let unused_waivers: Vec<UnusedWaiver> = waiver
        .waive_items
        .iter()
        .zip(&waiver.waive_reasons)
        .zip(&used)
        .filter(|(_, was_used)| !**was_used)
        .map(|((pattern, reason), _)| UnusedWaiver {
            pattern: pattern.clone(),
            reason: reason.clone(),
        })
        .collect();

    // Same PASS rule as assembly, over the post-waiver violation sets.
    let status = if missing.is_empty() && extra.is_empty() {
        CheckStatus::Pass
    } else {
        CheckStatus::Fail
    };

    FinalVerdict {
        status,
        found: verdict.found,
        missing,
        extra,
        waived,
        unused_waivers,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
