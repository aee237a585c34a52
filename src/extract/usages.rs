//! Usage scanning over application sources
//!
//! No attempt is made to understand string boundaries, attribute context, or
//! templating syntax: a token counts as used if it appears anywhere in the
//! file content, comments and string literals included. This over-approximates
//! usage on purpose, biasing toward keeping a selector that is referenced
//! through interpolation, concatenation, or dynamic binding.

use rayon::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Every distinct identifier-like token seen in any scanned file.
///
/// Grows monotonically, bounded by the vocabulary of the corpus rather than
/// file count or size.
pub type UsageSet = HashSet<String>;

/// Tokenizes application source files into a usage set.
pub struct UsageScanner {
    pattern: Regex,
    parallel: bool,
}

impl UsageScanner {
    pub fn new() -> Self {
        Self {
            // Maximal runs of letters, digits, hyphen, underscore
            pattern: Regex::new(r"[A-Za-z0-9_-]+").unwrap(),
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scan every file and union the per-file token sets.
    ///
    /// Read failures are non-fatal: the file is skipped with a warning and
    /// contributes nothing. In parallel mode each file produces a local set
    /// and the partials are merged at the end; no shared mutation during the
    /// hot loop.
    pub fn scan_usages(&self, files: &[PathBuf]) -> UsageSet {
        let usages = if self.parallel {
            files
                .par_iter()
                .map(|file| self.scan_file(file))
                .reduce(UsageSet::new, |mut acc, partial| {
                    acc.extend(partial);
                    acc
                })
        } else {
            let mut acc = UsageSet::new();
            for file in files {
                acc.extend(self.scan_file(file));
            }
            acc
        };

        debug!("Collected {} distinct tokens", usages.len());
        usages
    }

    /// Tokenize a single file into a local set.
    pub fn scan_file(&self, file: &Path) -> UsageSet {
        match std::fs::read_to_string(file) {
            Ok(content) => self.tokenize(&content),
            Err(err) => {
                warn!("Skipping unreadable file {}: {}", file.display(), err);
                UsageSet::new()
            }
        }
    }

    /// Extract every distinct token from a chunk of text.
    pub fn tokenize(&self, content: &str) -> UsageSet {
        self.pattern
            .find_iter(content)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for UsageScanner {
    fn default() -> Self {
        Self::new()
    }
}
