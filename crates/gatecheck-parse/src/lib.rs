//! # gatecheck-parse
//!
//! Extraction and multi-file parsing for the GATECHECK sign-off pipeline.
//!
//! This crate owns the only side-effecting collaborator in the core — the
//! [`reader::FsFileReader`], which transparently decompresses `.gz` logs —
//! together with the built-in [`extract`] context extractors and the
//! [`orchestrator::ParsingOrchestrator`] that follows indirect file
//! references recursively and produces one stable-ordered finding sequence.

pub mod extract;
pub mod orchestrator;
pub mod reader;

pub use extract::{LineExtractor, RegexExtractor};
pub use orchestrator::{ParseOutput, ParsingOrchestrator, MAX_REFERENCE_DEPTH};
pub use reader::FsFileReader;
