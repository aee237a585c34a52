//! Class selector definition extraction from stylesheet sources
//!
//! This is a loose, best-effort scanner, not a stylesheet grammar: any
//! dot-prefixed identifier run on a non-comment part of a line counts as a
//! definition site. Stylesheet-internal references (e.g. a qualifier inside a
//! compound selector) are therefore also recorded; treating an internal
//! reference as a definition is safer than missing a real one.

use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Single-line comment delimiter stripped before matching.
///
/// SASS/SCSS block comments are an accepted limitation of the line scanner.
const COMMENT_DELIMITER: &str = "//";

/// A file-and-line location where a selector declaration was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    /// 1-based line number
    pub line: usize,
}

/// Mapping from selector name to every location declaring it.
///
/// Keys are unique; per-key locations keep discovery order (traversal order,
/// then line order). A BTreeMap keeps iteration byte-lexicographic, which is
/// what makes the final report deterministic.
pub type DefinitionIndex = BTreeMap<String, Vec<SourceLocation>>;

/// Outcome of scanning one stylesheet line.
///
/// An explicit tagged result instead of silently dropped candidates, so the
/// extractor can be audited and tested line by line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// Selector names accepted on this line, left to right.
    Matched(Vec<String>),
    NoMatch,
}

/// Extracts class selector definitions from stylesheet files.
pub struct SelectorExtractor {
    pattern: Regex,
    parallel: bool,
}

impl SelectorExtractor {
    pub fn new() -> Self {
        Self {
            // Dot-prefixed identifier run: letters, digits, hyphen, underscore
            pattern: Regex::new(r"\.([A-Za-z0-9_-]+)").unwrap(),
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the definition index for the given stylesheet files.
    ///
    /// Files that cannot be read as text are skipped with a warning and
    /// contribute nothing. Malformed stylesheet syntax is never an error;
    /// the offending line simply yields zero or partial matches.
    pub fn extract_definitions(&self, files: &[PathBuf]) -> DefinitionIndex {
        let per_file: Vec<Vec<(String, SourceLocation)>> = if self.parallel {
            files.par_iter().map(|file| self.extract_file(file)).collect()
        } else {
            files.iter().map(|file| self.extract_file(file)).collect()
        };

        // Fold in file order so per-key location order stays deterministic
        // even when the per-file work ran on a thread pool.
        let mut index = DefinitionIndex::new();
        for pairs in per_file {
            for (name, location) in pairs {
                index.entry(name).or_default().push(location);
            }
        }

        debug!("Extracted {} distinct selectors", index.len());
        index
    }

    /// Extract `(name, location)` pairs from a single file, in line order.
    pub fn extract_file(&self, file: &Path) -> Vec<(String, SourceLocation)> {
        let content = match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                warn!("Skipping unreadable stylesheet {}: {}", file.display(), err);
                return Vec::new();
            }
        };

        self.extract_content(file, &content)
    }

    fn extract_content(&self, file: &Path, content: &str) -> Vec<(String, SourceLocation)> {
        let mut pairs = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            if let LineMatch::Matched(names) = self.scan_line(line) {
                for name in names {
                    pairs.push((
                        name,
                        SourceLocation {
                            file: file.to_path_buf(),
                            line: idx + 1,
                        },
                    ));
                }
            }
        }

        pairs
    }

    /// Scan one line for selector definition candidates.
    ///
    /// The comment tail is stripped first, then every dot-prefixed identifier
    /// is captured. Candidates starting with a digit are rejected so numeric
    /// literals like `.5em` are never misread as a selector named `5em`.
    pub fn scan_line(&self, line: &str) -> LineMatch {
        let code = line.split(COMMENT_DELIMITER).next().unwrap_or("");

        let names: Vec<String> = self
            .pattern
            .captures_iter(code)
            .map(|cap| cap[1].to_string())
            .filter(|name| !name.chars().next().is_some_and(|c| c.is_ascii_digit()))
            .collect();

        if names.is_empty() {
            LineMatch::NoMatch
        } else {
            LineMatch::Matched(names)
        }
    }
}

impl Default for SelectorExtractor {
    fn default() -> Self {
        Self::new()
    }
}
