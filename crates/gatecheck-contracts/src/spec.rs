//! Requirement and waiver specifications.
//!
//! These are the strongly-typed forms of the declarative checker
//! configuration.  They are validated once at load time; the pipeline never
//! threads untyped maps around.  The `"N/A"` / integer convention from the
//! configuration surface is captured by [`CountSpec`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GatecheckError, GatecheckResult};

/// A count field that is either the literal `"N/A"` or a non-negative
/// integer.
///
/// `"N/A"` means the corresponding feature (pattern list, waiver support) is
/// absent for this checker.  Any other string, or a negative number, is a
/// configuration error rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountSpec {
    NotApplicable,
    Count(usize),
}

impl Serialize for CountSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CountSpec::NotApplicable => serializer.serialize_str("N/A"),
            CountSpec::Count(n) => serializer.serialize_u64(*n as u64),
        }
    }
}

impl<'de> Deserialize<'de> for CountSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(n) if n >= 0 => Ok(CountSpec::Count(n as usize)),
            Raw::Int(n) => Err(D::Error::custom(format!(
                "count must be non-negative, got {n}"
            ))),
            Raw::Text(s) if s == "N/A" => Ok(CountSpec::NotApplicable),
            Raw::Text(s) => Err(D::Error::custom(format!(
                "expected \"N/A\" or a non-negative integer, got '{s}'"
            ))),
        }
    }
}

/// What a checker requires from the parsed findings.
///
/// `pattern_items` is empty for existence-based checkers.  By convention an
/// integer `requirement_count` equals `pattern_items.len()`; a mismatch is
/// tolerated (the assembler logs it) because it represents sloppy but
/// recoverable configuration, not a broken one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementSpec {
    pub requirement_count: CountSpec,
    #[serde(default)]
    pub pattern_items: Vec<String>,
}

impl RequirementSpec {
    /// A spec for an existence-based checker (no pattern list).
    pub fn not_applicable() -> Self {
        Self {
            requirement_count: CountSpec::NotApplicable,
            pattern_items: Vec::new(),
        }
    }

    /// A spec requiring exactly the given patterns.
    pub fn patterns(items: Vec<String>) -> Self {
        Self {
            requirement_count: CountSpec::Count(items.len()),
            pattern_items: items,
        }
    }
}

/// The three waiver modes a checker can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaiverMode {
    /// No waiver support at all.
    NotApplicable,
    /// Unconditionally waive every violation and force PASS.
    Global,
    /// Waive only violations matching a declared `waive_items` pattern.
    Selective,
}

/// Pre-approved exceptions for a checker.
///
/// `waive_reasons[i]` always corresponds to `waive_items[i]`.  In global
/// mode (`waiver_count == 0`) the items are commentary only and are never
/// matched against anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaiverSpec {
    pub waiver_count: CountSpec,
    #[serde(default)]
    pub waive_items: Vec<String>,
    #[serde(default)]
    pub waive_reasons: Vec<String>,
}

impl WaiverSpec {
    /// A spec for a checker without waiver support.
    pub fn not_applicable() -> Self {
        Self {
            waiver_count: CountSpec::NotApplicable,
            waive_items: Vec::new(),
            waive_reasons: Vec::new(),
        }
    }

    /// A global (force-pass) waiver with a single reason.
    pub fn global(reason: impl Into<String>) -> Self {
        Self {
            waiver_count: CountSpec::Count(0),
            waive_items: Vec::new(),
            waive_reasons: vec![reason.into()],
        }
    }

    /// A selective waiver from aligned (pattern, reason) pairs.
    pub fn selective(items: Vec<String>, reasons: Vec<String>) -> Self {
        Self {
            waiver_count: CountSpec::Count(items.len()),
            waive_items: items,
            waive_reasons: reasons,
        }
    }

    /// Which waiver mode this spec selects.
    pub fn mode(&self) -> WaiverMode {
        match self.waiver_count {
            CountSpec::NotApplicable => WaiverMode::NotApplicable,
            CountSpec::Count(0) => WaiverMode::Global,
            CountSpec::Count(_) => WaiverMode::Selective,
        }
    }

    /// Validate the item/reason alignment invariant.
    ///
    /// Only selective mode matches reasons to items by index, so only
    /// selective mode rejects a length mismatch.
    pub fn validate(&self) -> GatecheckResult<()> {
        if self.mode() == WaiverMode::Selective
            && self.waive_items.len() != self.waive_reasons.len()
        {
            return Err(GatecheckError::Config {
                reason: format!(
                    "waive_reasons length {} does not match waive_items length {}",
                    self.waive_reasons.len(),
                    self.waive_items.len()
                ),
            });
        }
        Ok(())
    }
}
