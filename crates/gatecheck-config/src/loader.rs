//! Configuration loading and validation.
//!
//! `load_str` / `load_file` parse the TOML document, substitute path
//! variables, resolve relative input paths against the config file's
//! directory, validate each checker's specs once, and build the
//! strongly-typed [`Checker`] list the pipeline consumes.  Every failure
//! here is `GatecheckError::Config` — configuration mistakes surface
//! immediately instead of degrading at runtime.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use gatecheck_contracts::checker::CheckerKind;
use gatecheck_contracts::error::{GatecheckError, GatecheckResult};
use gatecheck_contracts::spec::{RequirementSpec, WaiverSpec};
use gatecheck_core::traits::ContextExtractor;
use gatecheck_parse::extract::{LineExtractor, RegexExtractor};
use gatecheck_pipeline::runner::Checker;

use crate::schema::{CheckerConfig, ConfigFile, ExtractorConfig};

/// Parse `s` as TOML configuration and build the checker list.
///
/// `base_dir` anchors relative input paths (normally the config file's
/// directory).
pub fn load_str(s: &str, base_dir: &Path) -> GatecheckResult<Vec<Checker>> {
    let config: ConfigFile = toml::from_str(s).map_err(|e| GatecheckError::Config {
        reason: format!("failed to parse checker TOML: {e}"),
    })?;

    config
        .checkers
        .into_iter()
        .map(|checker| build_checker(checker, &config.vars, base_dir))
        .collect()
}

/// Read the file at `path` and parse it as checker configuration.
pub fn load_file(path: &Path) -> GatecheckResult<Vec<Checker>> {
    let contents = std::fs::read_to_string(path).map_err(|e| GatecheckError::Config {
        reason: format!("failed to read config file '{}': {e}", path.display()),
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    load_str(&contents, base_dir)
}

fn build_checker(
    config: CheckerConfig,
    vars: &BTreeMap<String, String>,
    base_dir: &Path,
) -> GatecheckResult<Checker> {
    let requirement = RequirementSpec {
        requirement_count: config.requirement_count,
        pattern_items: config.pattern_items,
    };
    let waiver = WaiverSpec {
        waiver_count: config.waiver_count,
        waive_items: config.waive_items,
        waive_reasons: config.waive_reasons,
    };
    waiver.validate().map_err(|e| GatecheckError::Config {
        reason: format!("checker '{}': {e}", config.name),
    })?;

    let kind = CheckerKind::derive(&requirement, &waiver);

    let input_files = config
        .input_files
        .iter()
        .map(|raw| {
            let substituted = substitute_vars(raw, vars).map_err(|reason| {
                GatecheckError::Config {
                    reason: format!("checker '{}': {reason}", config.name),
                }
            })?;
            let path = PathBuf::from(substituted);
            Ok(if path.is_absolute() {
                path
            } else {
                base_dir.join(path)
            })
        })
        .collect::<GatecheckResult<Vec<PathBuf>>>()?;

    let extractor: Box<dyn ContextExtractor> = match &config.extractor {
        ExtractorConfig::Lines => Box::new(LineExtractor::new()),
        ExtractorConfig::Regex {
            value_pattern,
            reference_pattern,
        } => Box::new(
            RegexExtractor::new(value_pattern, reference_pattern.as_deref()).map_err(|e| {
                GatecheckError::Config {
                    reason: format!("checker '{}': {e}", config.name),
                }
            })?,
        ),
    };

    debug!(checker = %config.name, kind = ?kind, inputs = input_files.len(), "checker configured");

    Ok(Checker {
        name: config.name,
        description: config.description,
        kind,
        requirement,
        waiver,
        input_files,
        extractor,
    })
}

/// Replace every `${name}` placeholder from `vars`.  A placeholder without
/// a definition is a configuration error, never silently left in place.
fn substitute_vars(raw: &str, vars: &BTreeMap<String, String>) -> Result<String, String> {
    let mut resolved = raw.to_string();
    for (name, value) in vars {
        resolved = resolved.replace(&format!("${{{name}}}"), value);
    }
    if let Some(start) = resolved.find("${") {
        let rest = &resolved[start..];
        let end = rest.find('}').map(|i| i + 1).unwrap_or(rest.len());
        return Err(format!("undefined path variable '{}'", &rest[..end]));
    }
    Ok(resolved)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
