mod exclude;
mod file_finder;

pub use exclude::ExclusionRules;
pub use file_finder::{FileFinder, TraversalError};
