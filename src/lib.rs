//! deadstyle - Unused SASS/CSS class selector detection for web projects
//!
//! This library cross-references class selectors defined in a stylesheet tree
//! against identifier tokens appearing anywhere in the application sources
//! (Vue/TS/JS) to find styling rules that are never referenced.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - Walk the stylesheet and application trees
//! 2. **Definition Extraction** - Locate `.class` declarations in stylesheets
//! 3. **Usage Scanning** - Tokenize application sources into a usage set
//! 4. **Reconciliation** - Set-difference defined against used selectors
//! 5. **Reporting** - Render a deterministic sorted report
//!
//! Detection is deliberately conservative and token-based: a selector counts
//! as used if its name appears anywhere in any scanned file, including inside
//! string literals or comments. The cost of keeping a truly dead selector is
//! lower than deleting one referenced through interpolation or concatenation.

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod extract;
pub mod report;

pub use analysis::{reconcile, Report, UnusedSelector};
pub use config::Config;
pub use discovery::{ExclusionRules, FileFinder, TraversalError};
pub use extract::{DefinitionIndex, SelectorExtractor, SourceLocation, UsageScanner, UsageSet};
pub use report::{ReportFormat, Reporter, ScanSummary};
