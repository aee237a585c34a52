//! Reconciliation of defined selectors against the usage token set
//!
//! This is the only place where "unused" is decided. It is a pure function of
//! the two data structures, performs no I/O, and cannot fail.

use crate::extract::{DefinitionIndex, SourceLocation, UsageSet};

/// A selector that is defined but never referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedSelector {
    pub name: String,
    /// Every location declaring the selector, in discovery order. Never empty.
    pub locations: Vec<SourceLocation>,
}

/// Unused selectors sorted byte-lexicographically by name.
pub type Report = Vec<UnusedSelector>;

/// Compute the selectors present in `definitions` but absent from `usages`.
///
/// The definition index iterates in byte-lexicographic key order, so the
/// report is deterministic across runs and platforms: identical inputs
/// produce byte-identical output.
pub fn reconcile(definitions: &DefinitionIndex, usages: &UsageSet) -> Report {
    definitions
        .iter()
        .filter(|(name, _)| !usages.contains(name.as_str()))
        .map(|(name, locations)| UnusedSelector {
            name: name.clone(),
            locations: locations.clone(),
        })
        .collect()
}
