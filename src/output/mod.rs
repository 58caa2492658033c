//! Output formatting and writing functionality

mod formatters;
pub mod progress;
mod writers;

pub use self::formatters::no_match_reason;
pub use self::progress::ProgressReporter;
pub use self::writers::{FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::SummaryFormat;
use crate::models::report::GenerationReport;

/// Trait for different summary formatters
pub trait Formatter {
    /// Format a generation report into a string
    fn format(&self, report: &GenerationReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &GenerationReport) -> Result<String> {
        if self.quiet {
            return Ok(formatters::format_report_quiet(report));
        }

        Ok(formatters::format_report_text(
            report,
            self.use_colors,
            self.verbose,
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &GenerationReport) -> Result<String> {
        formatters::format_report_json(report)
    }
}

/// CSV formatter listing the written requirements
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &GenerationReport) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create a formatter based on the summary format
pub fn create_formatter(
    format: SummaryFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        SummaryFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        SummaryFormat::Json => Box::new(JsonFormatter),
        SummaryFormat::Csv => Box::new(CsvFormatter),
    }
}
