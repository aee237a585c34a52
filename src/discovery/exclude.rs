//! Directory exclusion rules
//!
//! Decides whether a directory subtree should be descended into. Pure
//! comparison only: callers resolve relative exclusion entries against the
//! project root before building the rules.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Exclusion rules applied during tree traversal.
///
/// Name-based rules match a bare directory name at any depth (a directory
/// named `node_modules` anywhere in the tree is pruned). Path-based rules
/// match a specific subtree root: a path is excluded if it equals an entry
/// or has one as an ancestor.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    excluded_names: HashSet<String>,
    excluded_paths: HashSet<PathBuf>,
}

impl ExclusionRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bare directory name to exclude at every level of the tree.
    pub fn exclude_name(&mut self, name: impl Into<String>) {
        self.excluded_names.insert(name.into());
    }

    /// Add an already-resolved path whose whole subtree is excluded.
    pub fn exclude_path(&mut self, path: impl Into<PathBuf>) {
        self.excluded_paths.insert(path.into());
    }

    /// Check whether a directory should be skipped.
    ///
    /// Unknown or non-existent paths are simply never matched; there is no
    /// error path here.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if self.excluded_names.contains(name) {
                return true;
            }
        }

        self.excluded_paths
            .iter()
            .any(|excluded| path == excluded || path.starts_with(excluded))
    }
}
