use super::ScanSummary;
use crate::analysis::{Report, UnusedSelector};
use colored::Colorize;
use miette::Result;
use std::path::{Path, PathBuf};

/// Terminal reporter with colored output
pub struct TerminalReporter {
    root: PathBuf,
}

impl TerminalReporter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn report(&self, report: &Report, summary: &ScanSummary) -> Result<()> {
        println!("Found {} unique classes defined.", summary.defined);
        println!("Scanned {} files for usages.", summary.files_scanned);
        println!("Found {} used classes.", summary.used);

        println!();
        println!("{}", "--- Unused Classes Report ---".bold());

        if report.is_empty() {
            println!("{}", "No unused classes found!".green().bold());
            return Ok(());
        }

        for entry in report {
            self.print_entry(entry);
        }

        println!();
        println!(
            "{}",
            format!("{} unused classes found.", report.len())
                .yellow()
                .bold()
        );
        println!(
            "{}",
            "Tip: a selector only referenced via string concatenation still counts as used."
                .dimmed()
        );

        Ok(())
    }

    fn print_entry(&self, entry: &UnusedSelector) {
        let locations = entry
            .locations
            .iter()
            .map(|loc| format!("{}:{}", self.relative(&loc.file).display(), loc.line))
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "{} {} (defined in {})",
            "[UNUSED]".red().bold(),
            entry.name.white(),
            locations.dimmed()
        );
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
