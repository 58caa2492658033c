//! The generation pipeline
//!
//! A run moves through its stages strictly in order: scan the tree for
//! imports, list installed packages, match, then write the output file. A
//! fatal error stops the run in the stage it occurs in, so nothing is written
//! unless scanning and listing both succeeded.

use crate::core::matcher::{match_requirements, unmatched_modules};
use crate::core::packages::{PackageSource, PipFreeze};
use crate::core::walker::SourceWalker;
use crate::error::{handle_error, Result, ResultExt};
use crate::models::config::Settings;
use crate::models::report::GenerationReport;
use crate::output::{FileWriter, ProgressReporter};
use crate::parsers::imports::{ImportExtractor, RegexImportExtractor};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Where a run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Scanning,
    Listing,
    Matching,
    Writing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::Scanning => "scanning",
            Stage::Listing => "listing",
            Stage::Matching => "matching",
            Stage::Writing => "writing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Drives one requirements-generation run
pub struct Generator {
    settings: Settings,
    extractor: Box<dyn ImportExtractor>,
    source: Box<dyn PackageSource>,
    stage: Stage,
}

impl Generator {
    /// Create a generator using the regex extractor and the configured package manager
    pub fn new(settings: Settings) -> Self {
        let source = PipFreeze::from_settings(&settings);
        Self {
            settings,
            extractor: Box::new(RegexImportExtractor::new()),
            source: Box::new(source),
            stage: Stage::Init,
        }
    }

    /// Replace the installed-package source
    pub fn with_source(mut self, source: impl PackageSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Replace the import extractor
    pub fn with_extractor(mut self, extractor: impl ImportExtractor + 'static) -> Self {
        self.extractor = Box::new(extractor);
        self
    }

    /// Stage reached so far. After a failure this is the stage that failed.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run every stage and return what was found and written
    pub fn run(&mut self, reporter: &ProgressReporter) -> Result<GenerationReport> {
        let start = Instant::now();
        let mut report =
            GenerationReport::new(&self.settings.scan_path, &self.settings.output_file);

        self.stage = Stage::Scanning;
        let walker = SourceWalker::new(&self.settings)?;
        walker.check_root()?;
        let found = self.scan(&walker, reporter, &mut report)?;
        report.modules_found = found.iter().cloned().collect();

        self.stage = Stage::Listing;
        let message = format!(
            "Reading installed packages from '{}'...",
            self.source.describe()
        );
        let spinner = reporter.create_spinner(&message);
        if spinner.is_none() {
            reporter.print(&message);
        }
        let listed = self.source.installed_packages();
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let installed = listed?;
        report.installed_count = installed.len();

        self.stage = Stage::Matching;
        report.requirements = match_requirements(&found, &installed);
        report.unmatched_modules = unmatched_modules(&found, &installed);
        reporter.print_verbose(&format!(
            "Matched {} of {} module(s)",
            report.requirements.len(),
            found.len()
        ));

        self.stage = Stage::Writing;
        FileWriter::new(&self.settings.output_file).write_entries(&report.requirements)?;

        self.stage = Stage::Done;
        report.set_duration(start.elapsed());
        Ok(report)
    }

    fn scan(
        &self,
        walker: &SourceWalker,
        reporter: &ProgressReporter,
        report: &mut GenerationReport,
    ) -> Result<BTreeSet<String>> {
        reporter.print(&format!(
            "Scanning directory '{}' for Python files...",
            walker.root().display()
        ));

        let files = walker.find_source_files()?;
        let mut found = BTreeSet::new();

        for path in &files {
            reporter.print_verbose(&format!("Scanning {}", path.display()));
            report.files_scanned += 1;

            match self.read_modules(path) {
                Ok(modules) => found.extend(modules),
                Err(err) => {
                    report.add_warning(path, err.to_string());
                    if let Some(critical) = handle_error(err) {
                        return Err(critical);
                    }
                }
            }
        }

        Ok(found)
    }

    fn read_modules(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).with_file_context(path)?;
        Ok(self.extractor.extract(&String::from_utf8_lossy(&bytes)))
    }
}
