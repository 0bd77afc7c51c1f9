//! # gatecheck-config
//!
//! TOML-driven checker configuration for GATECHECK.
//!
//! A configuration file declares an ordered list of checkers — input files,
//! requirement and waiver specs, and extractor selection — plus a `[vars]`
//! table of path variables.  Everything is validated once at load time into
//! the strongly-typed forms from `gatecheck-contracts`; the pipeline never
//! sees untyped maps or unresolved placeholders.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use gatecheck_config::load_file;
//!
//! let checkers = load_file(Path::new("signoff.toml"))?;
//! // Run each checker against a `FileReader`.
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_file, load_str};
pub use schema::{CheckerConfig, ConfigFile, ExtractorConfig};
