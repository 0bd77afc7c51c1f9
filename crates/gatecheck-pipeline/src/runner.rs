//! The checker runner: one configured checker, one invocation, one report.
//!
//! Pipeline per invocation:
//!
//!   roots → ParsingOrchestrator → assembler (existence or pattern path)
//!         → waiver engine → output projection
//!
//! One invocation is a pure function of (input files, requirement spec,
//! waiver spec); invocations share no mutable state, so callers may run
//! many checkers concurrently without coordination.

use std::path::PathBuf;

use tracing::{debug, info};

use gatecheck_contracts::checker::CheckerKind;
use gatecheck_contracts::error::{GatecheckError, GatecheckResult};
use gatecheck_contracts::spec::{RequirementSpec, WaiverSpec};
use gatecheck_core::traits::{ContextExtractor, FileReader};
use gatecheck_parse::orchestrator::ParsingOrchestrator;

use crate::assembler::{assemble_existence, assemble_patterns};
use crate::report::{project, CheckReport};
use crate::waiver::apply_waivers;

/// One fully configured checker, ready to run against a file reader.
pub struct Checker {
    pub name: String,
    pub description: String,
    pub kind: CheckerKind,
    pub requirement: RequirementSpec,
    pub waiver: WaiverSpec,
    pub input_files: Vec<PathBuf>,
    pub extractor: Box<dyn ContextExtractor>,
}

impl Checker {
    /// Run the full evaluation pipeline for this checker.
    ///
    /// # Errors
    ///
    /// `GatecheckError::Config` when the waiver spec is malformed or when
    /// none of the configured root inputs could be read — the check cannot
    /// run meaningfully with zero accessible input, and that outcome is
    /// distinct from an ordinary FAIL.
    pub fn run(&self, reader: &dyn FileReader) -> GatecheckResult<CheckReport> {
        debug!(checker = %self.name, kind = ?self.kind, "checker starting");

        if self.input_files.is_empty() {
            return Err(GatecheckError::Config {
                reason: format!("checker '{}' has no input files configured", self.name),
            });
        }

        let output = ParsingOrchestrator::new(self.extractor.as_ref(), reader)
            .parse(&self.input_files);

        if output.searched_files.is_empty() {
            return Err(GatecheckError::Config {
                reason: format!(
                    "checker '{}' could not read any of its {} root input file(s)",
                    self.name,
                    self.input_files.len()
                ),
            });
        }

        let verdict = if self.kind.is_pattern_based() {
            assemble_patterns(
                &output.findings,
                &output.searched_files,
                &self.requirement,
                &self.description,
            )
        } else {
            assemble_existence(&output.findings, &output.searched_files, &self.description)
        };

        let final_verdict = apply_waivers(verdict, &self.waiver)?;

        info!(
            checker = %self.name,
            status = final_verdict.status.as_str(),
            found = final_verdict.found.len(),
            missing = final_verdict.missing.len(),
            extra = final_verdict.extra.len(),
            waived = final_verdict.waived.len(),
            "checker finished"
        );

        Ok(project(&self.name, &self.description, self.kind, final_verdict))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
