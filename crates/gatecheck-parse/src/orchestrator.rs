//! The parsing orchestrator: root files in, one stable-ordered finding
//! sequence out, following indirect references recursively.
//!
//! Traversal rules:
//!
//! - Root files are processed in their given order; each file's indirect
//!   references are followed depth-first in discovery order.  That
//!   first-encounter order assigns every file its rank.
//! - References are resolved relative to the directory of the file that
//!   declared them, never the process working directory.
//! - The visited set and depth counter are owned by one `parse` call, so
//!   concurrent checker invocations never interfere.
//! - A revisited file is silently skipped (reference cycles terminate), an
//!   unreadable file silently ends its branch, and depth 5 silently stops
//!   recursion.  None of these raise.
//!
//! The final finding order is a stable sort by (file-rank, line number with
//! unknown locations last, extraction index).  `searched_files` is every
//! successfully read path, deduplicated and sorted lexicographically —
//! independent of rank order.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use gatecheck_contracts::finding::{Finding, REFERENCED_FILES_KEY};
use gatecheck_core::traits::{ContextExtractor, FileReader};

/// Hard cap on indirect-reference recursion.  Roots are depth 0.
pub const MAX_REFERENCE_DEPTH: usize = 5;

/// The orchestrator's complete output for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// All findings in the prescribed stable order.
    pub findings: Vec<Finding>,
    /// Every successfully read absolute path, deduplicated and sorted.
    pub searched_files: Vec<String>,
}

/// One-shot recursive parser over a set of root input files.
pub struct ParsingOrchestrator<'a> {
    extractor: &'a dyn ContextExtractor,
    reader: &'a dyn FileReader,
}

/// Traversal state scoped to a single `parse` call.
struct Traversal {
    visited: HashSet<PathBuf>,
    searched: Vec<String>,
    /// (file-rank, extraction index, finding)
    collected: Vec<(usize, usize, Finding)>,
    next_rank: usize,
}

impl<'a> ParsingOrchestrator<'a> {
    pub fn new(extractor: &'a dyn ContextExtractor, reader: &'a dyn FileReader) -> Self {
        Self { extractor, reader }
    }

    /// Parse all roots and their transitive indirect references.
    pub fn parse(&self, roots: &[PathBuf]) -> ParseOutput {
        let mut state = Traversal {
            visited: HashSet::new(),
            searched: Vec::new(),
            collected: Vec::new(),
            next_rank: 0,
        };

        for root in roots {
            self.visit(root.clone(), 0, &mut state);
        }

        // Stable 3-key sort: file-rank, then line number with None last,
        // then extraction order within the same file and line.
        state
            .collected
            .sort_by_key(|(rank, index, finding)| {
                (
                    *rank,
                    finding.line_number.map_or(u64::MAX, u64::from),
                    *index,
                )
            });

        let findings = state.collected.into_iter().map(|(_, _, f)| f).collect();

        let mut searched_files = state.searched;
        searched_files.sort();
        searched_files.dedup();

        ParseOutput {
            findings,
            searched_files,
        }
    }

    fn visit(&self, path: PathBuf, depth: usize, state: &mut Traversal) {
        let path = normalize_path(&path);

        // Cycle safety: a file already seen in this run is never re-entered.
        if !state.visited.insert(path.clone()) {
            debug!(path = %path.display(), "already visited, skipping");
            return;
        }

        let text = match self.reader.read_text(&path) {
            Ok(text) => text,
            Err(e) => {
                // Non-fatal: this branch yields no findings, the run goes on.
                debug!(path = %path.display(), error = %e, "skipping unreadable file");
                return;
            }
        };

        let rank = state.next_rank;
        state.next_rank += 1;
        state.searched.push(path.display().to_string());

        let source = path.display().to_string();
        let findings = self.extractor.extract(&text, &source);
        debug!(
            path = %source,
            rank,
            depth,
            count = findings.len(),
            "extracted findings"
        );

        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let mut references = Vec::new();
        for (index, finding) in findings.into_iter().enumerate() {
            for target in referenced_files(&finding) {
                let target_path = PathBuf::from(&target);
                references.push(if target_path.is_absolute() {
                    target_path
                } else {
                    base.join(target_path)
                });
            }
            state.collected.push((rank, index, finding));
        }

        if depth >= MAX_REFERENCE_DEPTH {
            // Expected termination condition, not an error.
            debug!(path = %source, depth, "reference depth cap reached");
            return;
        }

        for reference in references {
            self.visit(reference, depth + 1, state);
        }
    }
}

/// Normalize the `referenced_files` metadata entry to a list of strings:
/// a bare string becomes a one-element list, an absent key an empty list,
/// and non-string array elements are dropped.
fn referenced_files(finding: &Finding) -> Vec<String> {
    match finding.parsed_fields.get(REFERENCED_FILES_KEY) {
        Some(serde_json::Value::String(s)) => vec![s.clone()],
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component.  Purely textual, so the visited set works the same
/// against real filesystems and in-memory test readers.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(Component::ParentDir);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

// ── Tests ─────────────────────────────────────────────────────────────────────
