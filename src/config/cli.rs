//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, SummaryArg};
use crate::error::Result;
use crate::models::config::{PartialSettings, SummaryFormat};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub suffix: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub pip: Option<String>,
    pub summary_format: Option<SummaryFormat>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            path: args.path.clone(),
            output: args.output.clone(),
            suffix: args.suffix.clone(),
            exclude: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            max_depth: args.max_depth,
            follow_links: args.follow_links,
            pip: args.pip.clone(),
            summary_format: args.format.map(|format| match format {
                SummaryArg::Text => SummaryFormat::Text,
                SummaryArg::Json => SummaryFormat::Json,
                SummaryArg::Csv => SummaryFormat::Csv,
            }),
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            scan_path: self.args.path.clone(),
            output_file: self.args.output.clone(),
            source_suffix: self.args.suffix.clone(),
            exclude_patterns: self.args.exclude.clone(),
            max_depth: self.args.max_depth,
            package_manager: self.args.pip.clone(),
            summary_format: self.args.summary_format,
            ..Default::default()
        };

        // Flags only ever switch a setting away from its default
        if self.args.follow_links {
            settings.follow_links = Some(true);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
            settings.verbose = Some(false);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
            settings.quiet = Some(false);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        super::parser::validate_partial_settings(&settings, &self.name)?;

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }
}
