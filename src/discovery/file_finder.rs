//! File discovery for stylesheet and application trees

use super::ExclusionRules;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Fatal traversal failures.
///
/// Per-file problems during the walk are logged and skipped; only a bad
/// configured root aborts the run.
#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("search root does not exist or is not a directory: {0}")]
    MissingRoot(PathBuf),

    #[error("search root is not readable: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Walks directory trees and yields files matching an extension allow-list.
///
/// Excluded subtrees are pruned before descent, so a dependency cache like
/// `node_modules` costs nothing regardless of its size.
pub struct FileFinder {
    rules: ExclusionRules,
    extensions: HashSet<String>,
}

impl FileFinder {
    /// Create a finder for the given rules and extensions.
    ///
    /// Extensions may be given with or without the leading dot; matching is
    /// case-sensitive.
    pub fn new(rules: ExclusionRules, extensions: &[String]) -> Self {
        let extensions = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();
        Self { rules, extensions }
    }

    /// Enumerate matching files under every root, depth-first.
    ///
    /// Entries are sorted by file name at each level so traversal order is
    /// deterministic across runs and platforms. Symlinks are not followed.
    pub fn find_files(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>, TraversalError> {
        let mut files = Vec::new();

        for root in roots {
            if !root.is_dir() {
                return Err(TraversalError::MissingRoot(root.clone()));
            }
            std::fs::read_dir(root).map_err(|source| TraversalError::Unreadable {
                path: root.clone(),
                source,
            })?;

            // A root can itself fall under the exclusion rules, e.g. when a
            // search dir equals the stylesheet root. Skip it entirely.
            if self.rules.is_excluded(root) {
                debug!("Root is excluded, skipping: {}", root.display());
                continue;
            }

            debug!("Scanning for files in: {}", root.display());
            files.extend(self.walk_root(root));
        }

        debug!("Found {} files", files.len());
        Ok(files)
    }

    fn walk_root(&self, root: &Path) -> Vec<PathBuf> {
        let rules = self.rules.clone();

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false) // exclusion is rule-driven, not gitignore-driven
            .hidden(false)
            .follow_links(false)
            .sort_by_file_name(|a: &OsStr, b: &OsStr| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                if is_dir && rules.is_excluded(entry.path()) {
                    trace!("Pruning: {}", entry.path().display());
                    return false;
                }
                true
            });

        builder
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter(|entry| self.has_allowed_extension(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }

    fn has_allowed_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.contains(e))
            .unwrap_or(false)
    }
}
