//! # gatecheck-core
//!
//! Leaf evaluators and trait seams for the GATECHECK sign-off pipeline.
//!
//! This crate holds the two composable primitives every checker kind is
//! built from — the [`matcher`] (fixed-precedence pattern language) and the
//! [`existence`] evaluator — plus the [`traits`] the parsing orchestrator
//! plugs collaborators into.  No I/O happens in this crate.

pub mod existence;
pub mod matcher;
pub mod traits;

pub use existence::{check_existence, ExistenceOutcome};
pub use matcher::{match_value, DefaultMode, MatchKind, MatchOutcome, RegexMode};
pub use traits::{ContextExtractor, FileReader};
