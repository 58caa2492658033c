//! Command implementations

use super::Args;
use crate::config::{cli::CliArgs, file::FileConfig, load_config};
use crate::core::Generator;
use crate::error::Result;
use crate::models::config::{Settings, SummaryFormat};
use crate::output::{create_formatter, OutputWriter, ProgressReporter, StdoutWriter};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Generate a requirements file
    Generate(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Generate(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Generate(args) => {
                let settings = load_config(CliArgs::from(args))?;
                generate(settings)
            }
            Command::Init => init(&FileConfig::new()),
        }
    }
}

fn generate(settings: Settings) -> Result<()> {
    // machine-readable summaries own stdout
    let quiet = settings.quiet || settings.summary_format != SummaryFormat::Text;
    let reporter = ProgressReporter::new(quiet, settings.verbose, settings.show_progress);

    print_settings(&settings, &reporter);

    let report = Generator::new(settings.clone()).run(&reporter)?;

    let formatter = create_formatter(
        settings.summary_format,
        settings.use_colors,
        settings.verbose,
        settings.quiet,
    );
    StdoutWriter.write(&formatter.format(&report)?)
}

fn print_settings(settings: &Settings, reporter: &ProgressReporter) {
    reporter.print_verbose(&format!(
        "{} v{} - requirements generator",
        crate::NAME,
        crate::VERSION
    ));
    reporter.print_verbose(&format!("Output file: {}", settings.output_file.display()));
    reporter.print_verbose(&format!("Source suffix: {}", settings.source_suffix));
    if !settings.exclude_patterns.is_empty() {
        reporter.print_verbose(&format!("Excluding: {}", settings.exclude_patterns.join(", ")));
    }
    if let Some(depth) = settings.max_depth {
        reporter.print_verbose(&format!("Maximum depth: {}", depth));
    }
    reporter.print_verbose(&format!(
        "Package manager: {} {}",
        settings.package_manager,
        settings.freeze_args.join(" ")
    ));
}

fn init(config: &FileConfig) -> Result<()> {
    if config.path().exists() {
        println!(
            "Configuration file already exists at: {}",
            config.path().display()
        );
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    config.create_default()?;

    println!(
        "Created default configuration file at: {}",
        config.path().display()
    );
    println!("Every setting in it is commented out. Uncomment the ones you want to change.");

    Ok(())
}
