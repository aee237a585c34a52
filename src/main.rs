use clap::Parser;
use colored::Colorize;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::PathBuf;
use tracing::info;

mod analysis;
mod config;
mod discovery;
mod extract;
mod report;

use analysis::reconcile;
use config::Config;
use discovery::FileFinder;
use extract::{SelectorExtractor, UsageScanner, UsageSet};
use report::{Reporter, ScanSummary};

/// deadstyle - Unused SASS/CSS class selector detection for web projects
#[derive(Parser, Debug)]
#[command(name = "deadstyle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the project directory to analyze
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stylesheet root, relative to the project directory
    #[arg(long)]
    sass_dir: Option<PathBuf>,

    /// Application roots to scan for usages (can be specified multiple times)
    #[arg(short, long)]
    search_dir: Vec<PathBuf>,

    /// Extra exclusions: bare directory names or root-relative paths
    /// (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Stylesheet extensions (can be specified multiple times)
    #[arg(long, value_name = "EXT")]
    style_ext: Vec<String>,

    /// Application source extensions (can be specified multiple times)
    #[arg(long, value_name = "EXT")]
    source_ext: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable parallel scanning within each phase
    #[arg(long)]
    parallel: bool,

    /// Exit with a non-zero status when unused selectors are found
    #[arg(long)]
    fail_on_unused: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for report::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => report::ReportFormat::Terminal,
            OutputFormat::Json => report::ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("deadstyle v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    let unused = run_analysis(&config, &cli)?;

    if unused > 0 && (cli.fail_on_unused || config.report.fail_on_unused) {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::from_default_locations(&cli.path)?
    };

    // Override with CLI arguments
    if let Some(sass_dir) = &cli.sass_dir {
        config.sass_dir = sass_dir.clone();
    }
    if !cli.search_dir.is_empty() {
        config.search_dirs = cli.search_dir.clone();
    }
    if !cli.style_ext.is_empty() {
        config.style_extensions = cli.style_ext.clone();
    }
    if !cli.source_ext.is_empty() {
        config.source_extensions = cli.source_ext.clone();
    }
    for raw in &cli.exclude {
        config.add_exclusion(raw);
    }

    Ok(config)
}

/// Run the full pipeline and return the number of unused selectors.
fn run_analysis(config: &Config, cli: &Cli) -> Result<usize> {
    use std::time::Instant;

    let start_time = Instant::now();

    let root = cli
        .path
        .canonicalize()
        .into_diagnostic()
        .wrap_err_with(|| format!("Project directory not found: {}", cli.path.display()))?;
    let root = config.resolve_root(&root);

    info!("Analyzing in {}", root.display());
    info!("Looking for CSS definitions in {}", config.sass_dir.display());

    // Step 1: Walk the stylesheet tree and extract definitions
    let style_finder = FileFinder::new(
        config.stylesheet_exclusions(&root),
        &config.style_extensions,
    );
    let stylesheet_files = style_finder
        .find_files(&[root.join(&config.sass_dir)])
        .into_diagnostic()?;

    info!("Found {} stylesheet files", stylesheet_files.len());

    let extractor = SelectorExtractor::new().with_parallel(cli.parallel);
    let definitions = extractor.extract_definitions(&stylesheet_files);

    // Step 2: Walk the application roots and build the usage set. The
    // stylesheet root is excluded here so stylesheet-only self-references
    // never count as usage.
    let search_roots: Vec<PathBuf> = config.search_dirs.iter().map(|d| root.join(d)).collect();
    let app_finder = FileFinder::new(
        config.application_exclusions(&root),
        &config.source_extensions,
    );
    let application_files = app_finder.find_files(&search_roots).into_diagnostic()?;

    info!("Scanning {} files for usages...", application_files.len());

    let scanner = UsageScanner::new().with_parallel(cli.parallel);
    let usages = if cli.parallel {
        if !cli.quiet {
            println!(
                "{}",
                format!(
                    "Parallel mode: scanning {} files...",
                    application_files.len()
                )
                .cyan()
            );
        }
        scanner.scan_usages(&application_files)
    } else {
        scan_with_progress(&scanner, &application_files, cli.quiet)
    };

    // Step 3: Reconcile and report
    let report = reconcile(&definitions, &usages);
    let summary = ScanSummary {
        defined: definitions.len(),
        used: definitions.len() - report.len(),
        files_scanned: application_files.len(),
    };

    let format = cli
        .format
        .clone()
        .map(Into::into)
        .unwrap_or_else(|| parse_format(&config.report.format));
    let reporter = Reporter::new(format, cli.output.clone(), root);
    reporter.report(&report, &summary)?;

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report.len())
}

fn scan_with_progress(scanner: &UsageScanner, files: &[PathBuf], quiet: bool) -> UsageSet {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    };

    let mut usages = UsageSet::new();
    for file in files {
        usages.extend(scanner.scan_file(file));
        pb.inc(1);
    }
    pb.finish_and_clear();

    usages
}

fn parse_format(s: &str) -> report::ReportFormat {
    match s.to_lowercase().as_str() {
        "json" => report::ReportFormat::Json,
        _ => report::ReportFormat::Terminal,
    }
}
