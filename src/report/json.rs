use super::ScanSummary;
use crate::analysis::Report;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output
pub struct JsonReporter {
    output_path: Option<PathBuf>,
    root: PathBuf,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>, root: PathBuf) -> Self {
        Self { output_path, root }
    }

    pub fn report(&self, report: &Report, summary: &ScanSummary) -> Result<()> {
        let document = JsonReport::build(report, summary, &self.root);
        let json = serde_json::to_string_pretty(&document).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    defined_classes: usize,
    used_classes: usize,
    files_scanned: usize,
    total_unused: usize,
    unused: Vec<JsonUnused>,
}

#[derive(Serialize)]
struct JsonUnused {
    name: String,
    locations: Vec<JsonLocation>,
}

#[derive(Serialize)]
struct JsonLocation {
    file: String,
    line: usize,
}

impl JsonReport {
    fn build(report: &Report, summary: &ScanSummary, root: &PathBuf) -> Self {
        let unused: Vec<JsonUnused> = report
            .iter()
            .map(|entry| JsonUnused {
                name: entry.name.clone(),
                locations: entry
                    .locations
                    .iter()
                    .map(|loc| JsonLocation {
                        file: loc
                            .file
                            .strip_prefix(root)
                            .unwrap_or(&loc.file)
                            .to_string_lossy()
                            .to_string(),
                        line: loc.line,
                    })
                    .collect(),
            })
            .collect();

        Self {
            version: "1.0",
            defined_classes: summary.defined,
            used_classes: summary.used,
            files_scanned: summary.files_scanned,
            total_unused: report.len(),
            unused,
        }
    }
}
