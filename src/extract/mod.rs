mod definitions;
mod usages;

pub use definitions::{DefinitionIndex, LineMatch, SelectorExtractor, SourceLocation};
pub use usages::{UsageScanner, UsageSet};
