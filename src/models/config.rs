//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default source-file suffix
pub const DEFAULT_SOURCE_SUFFIX: &str = ".py";

/// Default output file for the generated manifest
pub const DEFAULT_OUTPUT_FILE: &str = "requirements.txt";

/// Default package-manager executable
pub const DEFAULT_PACKAGE_MANAGER: &str = "pip";

/// Main configuration settings for reqgen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory to scan for source files
    pub scan_path: PathBuf,

    /// Requirements file to write
    pub output_file: PathBuf,

    /// Suffix a file name must end with to be scanned
    pub source_suffix: String,

    /// Glob patterns for files and directories to skip
    pub exclude_patterns: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Package-manager executable
    pub package_manager: String,

    /// Arguments that make the package manager print its freeze listing
    pub freeze_args: Vec<String>,

    /// Format of the summary printed after a run
    pub summary_format: SummaryFormat,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show per-file progress and settings
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show a spinner while waiting on the package manager
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            exclude_patterns: Vec::new(),
            max_depth: None,
            follow_links: false,
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
            freeze_args: vec!["freeze".to_string()],
            summary_format: SummaryFormat::Text,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported summary formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for SummaryFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(SummaryFormat::Text),
            "json" => Ok(SummaryFormat::Json),
            "csv" => Ok(SummaryFormat::Csv),
            _ => Err(format!("Invalid summary format: {}", s)),
        }
    }
}

impl std::fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryFormat::Text => write!(f, "text"),
            SummaryFormat::Json => write!(f, "json"),
            SummaryFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub source_suffix: Option<String>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: Option<bool>,
    pub package_manager: Option<String>,
    pub freeze_args: Option<Vec<String>>,
    pub summary_format: Option<SummaryFormat>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.source_suffix.is_some() {
            self.source_suffix = other.source_suffix;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.package_manager.is_some() {
            self.package_manager = other.package_manager;
        }
        if other.freeze_args.is_some() {
            self.freeze_args = other.freeze_args;
        }
        if other.summary_format.is_some() {
            self.summary_format = other.summary_format;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert to full Settings, filling gaps with defaults
    pub fn to_settings(&self) -> Settings {
        let defaults = Settings::default();

        Settings {
            scan_path: self.scan_path.clone().unwrap_or(defaults.scan_path),
            output_file: self.output_file.clone().unwrap_or(defaults.output_file),
            source_suffix: self.source_suffix.clone().unwrap_or(defaults.source_suffix),
            exclude_patterns: self
                .exclude_patterns
                .clone()
                .unwrap_or(defaults.exclude_patterns),
            max_depth: self.max_depth.or(defaults.max_depth),
            follow_links: self.follow_links.unwrap_or(defaults.follow_links),
            package_manager: self
                .package_manager
                .clone()
                .unwrap_or(defaults.package_manager),
            freeze_args: self.freeze_args.clone().unwrap_or(defaults.freeze_args),
            summary_format: self.summary_format.unwrap_or(defaults.summary_format),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
        }
    }
}
