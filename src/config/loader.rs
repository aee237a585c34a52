use crate::discovery::ExclusionRules;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a deadstyle run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stylesheet root, relative to the project root
    pub sass_dir: PathBuf,

    /// Application roots to scan for usages, relative to the project root
    pub search_dirs: Vec<PathBuf>,

    /// Directory names excluded at every depth of the tree
    pub ignore_names: Vec<String>,

    /// Subtree roots excluded from scanning, relative to the project root
    pub ignore_dirs: Vec<PathBuf>,

    /// Extensions treated as stylesheets
    pub style_extensions: Vec<String>,

    /// Extensions treated as application sources
    pub source_extensions: Vec<String>,

    /// Report configuration
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: terminal, json
    pub format: String,

    /// Exit non-zero when unused selectors are found (for CI gates)
    pub fail_on_unused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sass_dir: PathBuf::from("app/assets/sass"),
            search_dirs: vec![PathBuf::from("app")],
            ignore_names: vec![
                "node_modules".to_string(),
                ".nuxt".to_string(),
                ".output".to_string(),
                "dist".to_string(),
                ".git".to_string(),
            ],
            ignore_dirs: vec![],
            style_extensions: vec![".sass".to_string(), ".scss".to_string(), ".css".to_string()],
            source_extensions: vec![
                ".vue".to_string(),
                ".ts".to_string(),
                ".js".to_string(),
                ".mjs".to_string(),
            ],
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
            fail_on_unused: false,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations
    pub fn from_default_locations(project_root: &Path) -> Result<Self> {
        let default_names = [
            ".deadstyle.yml",
            ".deadstyle.yaml",
            ".deadstyle.toml",
            "deadstyle.yml",
            "deadstyle.yaml",
            "deadstyle.toml",
        ];

        for name in &default_names {
            let path = project_root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Resolve the effective project root.
    ///
    /// If the stylesheet root is missing under `root` but present under
    /// `root/frontend`, the analysis runs against `root/frontend` instead.
    /// Lets the tool be invoked from a repository root that nests the web
    /// project one level down.
    pub fn resolve_root(&self, root: &Path) -> PathBuf {
        if !root.join(&self.sass_dir).is_dir() {
            let nested = root.join("frontend");
            if nested.join(&self.sass_dir).is_dir() {
                return nested;
            }
        }
        root.to_path_buf()
    }

    /// Record an extra exclusion from the command line.
    ///
    /// Entries containing a path separator are treated as root-relative
    /// subtree exclusions, bare entries as directory names.
    pub fn add_exclusion(&mut self, raw: &str) {
        if raw.contains('/') || raw.contains('\\') {
            self.ignore_dirs.push(PathBuf::from(raw));
        } else {
            self.ignore_names.push(raw.to_string());
        }
    }

    /// Exclusion rules for the stylesheet walk.
    pub fn stylesheet_exclusions(&self, root: &Path) -> ExclusionRules {
        let mut rules = ExclusionRules::new();
        for name in &self.ignore_names {
            rules.exclude_name(name.clone());
        }
        for dir in &self.ignore_dirs {
            rules.exclude_path(root.join(dir));
        }
        rules
    }

    /// Exclusion rules for the application walk.
    ///
    /// Identical to the stylesheet rules plus the stylesheet root itself, so
    /// stylesheet-internal references can never mark a selector as used, even
    /// when a search dir contains (or equals) the stylesheet root.
    pub fn application_exclusions(&self, root: &Path) -> ExclusionRules {
        let mut rules = self.stylesheet_exclusions(root);
        rules.exclude_path(root.join(&self.sass_dir));
        rules
    }
}
