//! # gatecheck-pipeline
//!
//! The layered check-evaluation pipeline for GATECHECK sign-off checking.
//!
//! Stages, in execution order:
//!
//! 1. [`assembler`] — classify stable-ordered findings against a
//!    requirement spec into found / missing / extra and compute the
//!    pre-waiver PASS/FAIL status.
//! 2. [`waiver`] — reclassify violations as accepted exceptions under
//!    global or selective policy, tracking unused waiver declarations.
//! 3. [`report`] — project the final verdict onto the fields the checker's
//!    kind defines.
//!
//! [`runner::Checker`] wires the stages (plus the parsing orchestrator from
//! `gatecheck-parse`) into one invocation.

pub mod assembler;
pub mod report;
pub mod runner;
pub mod waiver;

pub use report::{project, CheckReport};
pub use runner::Checker;
pub use waiver::apply_waivers;
