//! Output formatting functionality
//!
//! Renders a [`GenerationReport`] as text, JSON or CSV.

use crate::error::{ReqgenError, Result};
use crate::models::report::GenerationReport;
use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;

fn paint(text: &str, style: Style, use_colors: bool) -> String {
    if use_colors {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Explanation printed under the "nothing found" line
pub fn no_match_reason(report: &GenerationReport) -> String {
    if report.no_modules_detected() {
        "No import statements were detected.".to_string()
    } else {
        format!(
            "{} detected module(s) had no installed match: {}",
            report.unmatched_modules.len(),
            report.unmatched_modules.join(", ")
        )
    }
}

/// Format a report as the end-of-run text summary
pub fn format_report_text(report: &GenerationReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();
    let out = report.output_file.display().to_string();

    if report.has_requirements() {
        output.push_str(&paint(
            &format!(
                "Successfully generated '{}' with detected Python modules and their versions.",
                out
            ),
            Green.bold(),
            use_colors,
        ));
        output.push('\n');
        output.push_str(&format!("Contents of '{}':\n", out));

        for entry in &report.requirements {
            output.push_str(&entry.line);
            output.push('\n');
        }
    } else {
        output.push_str(&paint(
            "No external Python modules with installed versions were found.",
            Yellow.bold(),
            use_colors,
        ));
        output.push('\n');
        output.push_str(&no_match_reason(report));
        output.push('\n');
    }

    if verbose {
        output.push('\n');
        output.push_str(&paint("Run Statistics", Blue.bold(), use_colors));
        output.push('\n');
        output.push_str(&format!("Files scanned: {}\n", report.files_scanned));
        output.push_str(&format!("Modules found: {}\n", report.modules_found.len()));
        output.push_str(&format!("Installed packages: {}\n", report.installed_count));
        output.push_str(&format!("Requirements written: {}\n", report.requirements.len()));
        output.push_str(&format!("Duration: {}\n", report.format_duration()));

        if report.has_requirements() && !report.unmatched_modules.is_empty() {
            output.push_str(&format!(
                "Unmatched modules: {}\n",
                report.unmatched_modules.join(", ")
            ));
        }

        if !report.warnings.is_empty() {
            output.push_str(&format!("\nWarnings ({}):\n", report.warnings.len()));
            for warning in &report.warnings {
                output.push_str(&format!(
                    "  [{}] {}\n",
                    paint("WARNING", Red.normal(), use_colors),
                    warning.message
                ));
            }
        }
    }

    output
}

/// Single-line summary for quiet mode
pub fn format_report_quiet(report: &GenerationReport) -> String {
    if report.has_requirements() {
        format!(
            "{}: {} requirement(s)\n",
            report.output_file.display(),
            report.requirements.len()
        )
    } else {
        "No external Python modules with installed versions were found.\n".to_string()
    }
}

/// Format a report as JSON
pub fn format_report_json(report: &GenerationReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

/// Format the written requirements as CSV
pub fn format_report_csv(report: &GenerationReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["name", "version", "line"])?;
    for entry in &report.requirements {
        writer.write_record([entry.name.as_str(), entry.version.as_str(), entry.line.as_str()])?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|e| ReqgenError::io_error(e.into_error()))?;

    String::from_utf8(buffer).map_err(|e| ReqgenError::CsvSerialize { source: e })
}
