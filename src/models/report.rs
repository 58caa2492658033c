//! Outcome of a generation run

use crate::models::package::RequirementEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A recoverable problem with one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Everything a run found, matched and wrote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub scan_path: PathBuf,
    pub output_file: PathBuf,
    /// Number of source files visited
    pub files_scanned: usize,
    /// Distinct top-level modules, sorted
    pub modules_found: Vec<String>,
    pub installed_count: usize,
    pub requirements: Vec<RequirementEntry>,
    /// Found modules with no installed package, sorted
    pub unmatched_modules: Vec<String>,
    pub warnings: Vec<ScanWarning>,
    pub generated_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl GenerationReport {
    /// Create an empty report for a run over `scan_path`
    pub fn new(scan_path: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            scan_path: scan_path.into(),
            output_file: output_file.into(),
            files_scanned: 0,
            modules_found: Vec::new(),
            installed_count: 0,
            requirements: Vec::new(),
            unmatched_modules: Vec::new(),
            warnings: Vec::new(),
            generated_at: Utc::now(),
            duration_ms: 0,
        }
    }

    pub fn add_warning(&mut self, path: impl Into<PathBuf>, message: impl Into<String>) {
        self.warnings.push(ScanWarning {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    }

    pub fn has_requirements(&self) -> bool {
        !self.requirements.is_empty()
    }

    /// True when no import statement was found at all
    pub fn no_modules_detected(&self) -> bool {
        self.modules_found.is_empty()
    }

    /// Format the run duration in a human-readable way
    pub fn format_duration(&self) -> String {
        if self.duration_ms < 1000 {
            format!("{}ms", self.duration_ms)
        } else {
            format!("{:.2}s", self.duration_ms as f64 / 1000.0)
        }
    }
}
