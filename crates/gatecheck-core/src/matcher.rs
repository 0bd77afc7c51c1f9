//! The pattern matcher: one text value against one pattern string.
//!
//! A fixed precedence decides how the pattern is interpreted — first
//! applicable rule wins:
//!
//! 1. **Alternatives** — `|` splits the pattern into literal substring
//!    alternatives (segments are never compiled as regex or wildcard).
//! 2. **Regex** — the `regex:` prefix compiles the remainder.
//! 3. **Wildcard** — `*` / `?` glob the entire string, anchored both ends.
//! 4. **Default** — substring or full equality per the configured mode.
//!
//! Every branch is case-sensitive on every platform, and no input — not
//! even an uncompilable regex — makes the matcher panic.  A bad regex
//! degrades to a non-match whose reason carries the literal prefix
//! `"Invalid Regex: "`.

use regex::Regex;
use tracing::debug;

/// Literal prefix selecting the regex branch.
pub const REGEX_PREFIX: &str = "regex:";

/// Literal prefix carried by the reason of an uncompilable-regex non-match.
pub const INVALID_REGEX_PREFIX: &str = "Invalid Regex: ";

/// How rule 4 compares when no higher-precedence rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultMode {
    /// Case-sensitive substring test.
    Contains,
    /// Case-sensitive full-string equality.
    Exact,
}

/// How a `regex:` pattern is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegexMode {
    /// Match anywhere in the text.
    Search,
    /// Match starting at the beginning of the text.
    Match,
}

impl RegexMode {
    /// Parse a mode string leniently: anything other than the two
    /// recognized values silently falls back to `Search`, never raises.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "match" => RegexMode::Match,
            _ => RegexMode::Search,
        }
    }
}

/// Which precedence rule produced the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Alternatives,
    Regex,
    Wildcard,
    Contains,
    Exact,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Alternatives => "alternatives",
            MatchKind::Regex => "regex",
            MatchKind::Wildcard => "wildcard",
            MatchKind::Contains => "contains",
            MatchKind::Exact => "exact",
        }
    }
}

/// The verdict for one (text, pattern) evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub is_match: bool,
    pub reason: String,
    pub kind: MatchKind,
}

impl MatchOutcome {
    fn new(is_match: bool, reason: impl Into<String>, kind: MatchKind) -> Self {
        Self {
            is_match,
            reason: reason.into(),
            kind,
        }
    }
}

/// Evaluate `text` against `pattern` under the fixed precedence.
pub fn match_value(
    text: &str,
    pattern: &str,
    default_mode: DefaultMode,
    regex_mode: RegexMode,
) -> MatchOutcome {
    let outcome = if pattern.contains('|') {
        // ── Rule 1: alternatives ─────────────────────────────────────────
        match_alternatives(text, pattern)
    } else if let Some(inner) = pattern.strip_prefix(REGEX_PREFIX) {
        // ── Rule 2: regex ────────────────────────────────────────────────
        match_regex(text, inner, regex_mode)
    } else if pattern.contains('*') || pattern.contains('?') {
        // ── Rule 3: wildcard ─────────────────────────────────────────────
        match_wildcard(text, pattern)
    } else {
        // ── Rule 4: default mode ─────────────────────────────────────────
        match default_mode {
            DefaultMode::Contains => {
                let is_match = text.contains(pattern);
                let reason = if is_match {
                    format!("'{pattern}' found as substring")
                } else {
                    format!("'{pattern}' not found as substring")
                };
                MatchOutcome::new(is_match, reason, MatchKind::Contains)
            }
            DefaultMode::Exact => {
                let is_match = text == pattern;
                let reason = if is_match {
                    format!("exact match on '{pattern}'")
                } else {
                    format!("text does not equal '{pattern}'")
                };
                MatchOutcome::new(is_match, reason, MatchKind::Exact)
            }
        }
    };

    debug!(
        pattern = %pattern,
        kind = outcome.kind.as_str(),
        is_match = outcome.is_match,
        "pattern evaluated"
    );
    outcome
}

/// Rule 1: split on `|`, trim each segment, drop empty segments, and test
/// each survivor as a literal substring.  Segments that look like regex or
/// wildcard syntax stay literal.
fn match_alternatives(text: &str, pattern: &str) -> MatchOutcome {
    let segments: Vec<&str> = pattern
        .split('|')
        .map(str::trim)
        .filter(|seg| !seg.is_empty())
        .collect();

    for segment in &segments {
        if text.contains(segment) {
            return MatchOutcome::new(
                true,
                format!("alternative '{segment}' found as substring"),
                MatchKind::Alternatives,
            );
        }
    }

    MatchOutcome::new(
        false,
        format!("none of {} alternatives found as substring", segments.len()),
        MatchKind::Alternatives,
    )
}

/// Rule 2: compile and apply the regex.  Compilation failure is a
/// well-defined non-match, never a panic.
fn match_regex(text: &str, inner: &str, mode: RegexMode) -> MatchOutcome {
    let compiled = match Regex::new(inner) {
        Ok(re) => re,
        Err(e) => {
            return MatchOutcome::new(
                false,
                format!("{INVALID_REGEX_PREFIX}{e}"),
                MatchKind::Regex,
            );
        }
    };

    let is_match = match mode {
        RegexMode::Search => compiled.is_match(text),
        // Match-mode anchors at the start of the text only: the leftmost
        // match must begin at offset 0.
        RegexMode::Match => compiled.find(text).is_some_and(|m| m.start() == 0),
    };

    let reason = if is_match {
        format!("regex '{inner}' matched")
    } else {
        format!("regex '{inner}' did not match")
    };
    MatchOutcome::new(is_match, reason, MatchKind::Regex)
}

/// Rule 3: OS-independent glob over the entire string, anchored both ends.
/// `*` is any run of characters, `?` any single character; everything else
/// is literal.
fn match_wildcard(text: &str, pattern: &str) -> MatchOutcome {
    let mut translated = String::with_capacity(pattern.len() + 8);
    translated.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => translated.push_str(".*"),
            '?' => translated.push('.'),
            other => translated.push_str(&regex::escape(&other.to_string())),
        }
    }
    translated.push('$');

    match Regex::new(&translated) {
        Ok(re) => {
            let is_match = re.is_match(text);
            let reason = if is_match {
                format!("wildcard '{pattern}' matched")
            } else {
                format!("wildcard '{pattern}' did not match")
            };
            MatchOutcome::new(is_match, reason, MatchKind::Wildcard)
        }
        // Unreachable for any translated glob, kept as a non-match for the
        // never-panic guarantee.
        Err(e) => MatchOutcome::new(
            false,
            format!("{INVALID_REGEX_PREFIX}{e}"),
            MatchKind::Wildcard,
        ),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn m(text: &str, pattern: &str) -> MatchOutcome {
        match_value(text, pattern, DefaultMode::Contains, RegexMode::Search)
    }

    // ── Precedence ────────────────────────────────────────────────────────────

    /// Every rule routes through the same exit and reports its own kind.
    #[test]
    fn each_rule_reports_its_kind() {
        assert_eq!(m("abc", "a|b").kind, MatchKind::Alternatives);
        assert_eq!(m("abc", "regex:a").kind, MatchKind::Regex);
        assert_eq!(m("abc", "a*").kind, MatchKind::Wildcard);
        assert_eq!(m("abc", "b").kind, MatchKind::Contains);
        assert_eq!(
            match_value("abc", "abc", DefaultMode::Exact, RegexMode::Search).kind,
            MatchKind::Exact
        );
    }

    /// A `|` in the pattern forces the alternatives branch even when a
    /// segment looks like regex syntax — segments stay literal.
    #[test]
    fn alternatives_take_precedence_over_regex() {
        let hit = m("regex:^a", "regex:^a|zzz");
        assert!(hit.is_match);
        assert_eq!(hit.kind, MatchKind::Alternatives);

        // The same pattern against text the *compiled* regex would match
        // must NOT match, because the segment is a literal substring.
        let miss = m("abc", "regex:^a|zzz");
        assert!(!miss.is_match);
        assert_eq!(miss.kind, MatchKind::Alternatives);
    }

    /// Empty alternative segments are dropped, so `"|a||"` behaves as `"a"`.
    #[test]
    fn empty_alternative_segments_are_ignored() {
        let outcome = m("abc", "|a||");
        assert!(outcome.is_match);
        assert_eq!(outcome.kind, MatchKind::Alternatives);
    }

    #[test]
    fn alternative_segments_are_trimmed() {
        let outcome = m("the Innovus run", " DesignCompiler | Innovus ");
        assert!(outcome.is_match);
    }

    // ── Regex branch ──────────────────────────────────────────────────────────

    #[test]
    fn regex_search_matches_anywhere() {
        let outcome = m("tool: Innovus 21.10", "regex:Innovus \\d+");
        assert!(outcome.is_match);
        assert_eq!(outcome.kind, MatchKind::Regex);
    }

    /// Match mode anchors at the start of the text only.
    #[test]
    fn regex_match_mode_anchors_at_start() {
        let anchored = match_value("abc", "regex:b", DefaultMode::Contains, RegexMode::Match);
        assert!(!anchored.is_match);

        let at_start = match_value("abc", "regex:a.c", DefaultMode::Contains, RegexMode::Match);
        assert!(at_start.is_match);

        // Search mode finds the same pattern mid-string.
        let searched = match_value("abc", "regex:b", DefaultMode::Contains, RegexMode::Search);
        assert!(searched.is_match);
    }

    /// An uncompilable regex degrades to a non-match with the literal
    /// "Invalid Regex: " reason prefix — it never panics.
    #[test]
    fn bad_regex_is_a_safe_non_match() {
        let outcome = m("abc", "regex:[");
        assert!(!outcome.is_match);
        assert_eq!(outcome.kind, MatchKind::Regex);
        assert!(
            outcome.reason.starts_with(INVALID_REGEX_PREFIX),
            "reason must start with the invalid-regex prefix: {}",
            outcome.reason
        );
    }

    /// Unrecognized regex mode strings silently fall back to search.
    #[test]
    fn unknown_regex_mode_falls_back_to_search() {
        assert_eq!(RegexMode::parse_lenient("search"), RegexMode::Search);
        assert_eq!(RegexMode::parse_lenient("match"), RegexMode::Match);
        assert_eq!(RegexMode::parse_lenient("fullmatch"), RegexMode::Search);
        assert_eq!(RegexMode::parse_lenient(""), RegexMode::Search);
    }

    // ── Wildcard branch ───────────────────────────────────────────────────────

    /// Wildcard matching is case-sensitive regardless of platform.
    #[test]
    fn wildcard_is_case_sensitive() {
        assert!(!m("Test.txt", "test.*").is_match);
        assert!(m("test.txt", "test.*").is_match);
    }

    /// The glob is anchored at both ends of the string.
    #[test]
    fn wildcard_matches_entire_string() {
        assert!(m("design_top.rpt", "design_*.rpt").is_match);
        assert!(!m("design_top.rpt.gz", "design_*.rpt").is_match);

        let outcome = m("a.log", "?.log");
        assert!(outcome.is_match);
        assert_eq!(outcome.kind, MatchKind::Wildcard);
        assert!(!m("ab.log", "?.log").is_match);
    }

    /// Regex metacharacters inside a wildcard pattern stay literal.
    #[test]
    fn wildcard_escapes_regex_metacharacters() {
        assert!(m("timing(setup).rpt", "timing(setup).*").is_match);
        assert!(!m("timingXsetupY.rpt", "timing(setup).*").is_match);
    }

    // ── Default branch ────────────────────────────────────────────────────────

    #[test]
    fn default_contains_is_substring() {
        let outcome = m("// Generator: Cadence Innovus 21.10", "Innovus");
        assert!(outcome.is_match);
        assert_eq!(outcome.kind, MatchKind::Contains);

        assert!(!m("// Generator: Cadence Innovus 21.10", "innovus").is_match);
    }

    #[test]
    fn default_exact_requires_full_equality() {
        let exact = match_value("PASS", "PASS", DefaultMode::Exact, RegexMode::Search);
        assert!(exact.is_match);
        assert_eq!(exact.kind, MatchKind::Exact);

        let partial = match_value("PASSED", "PASS", DefaultMode::Exact, RegexMode::Search);
        assert!(!partial.is_match);
    }
}
