mod json;
mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::analysis::Report;
use miette::Result;
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Default)]
pub enum ReportFormat {
    #[default]
    Terminal,
    Json,
}

/// Headline counts printed alongside the unused entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanSummary {
    /// Distinct selectors found in the stylesheet tree
    pub defined: usize,
    /// Defined selectors that appeared as a token somewhere
    pub used: usize,
    /// Application files scanned for usages
    pub files_scanned: usize,
}

/// Reporter for outputting the unused selector findings
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
    /// Project root, used to render definition locations as relative paths
    root: PathBuf,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>, root: PathBuf) -> Self {
        Self {
            format,
            output_path,
            root,
        }
    }

    pub fn report(&self, report: &Report, summary: &ScanSummary) -> Result<()> {
        match &self.format {
            ReportFormat::Terminal => {
                let reporter = TerminalReporter::new(self.root.clone());
                reporter.report(report, summary)
            }
            ReportFormat::Json => {
                let reporter = JsonReporter::new(self.output_path.clone(), self.root.clone());
                reporter.report(report, summary)
            }
        }
    }
}
