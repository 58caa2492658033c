//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// reqgen - requirements.txt generator for Python projects
#[derive(Parser, Debug)]
#[command(name = "reqgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate requirements.txt from the imports of a Python project")]
#[command(long_about = "reqgen scans a directory tree for Python source files, collects the top-level \
modules they import, and pins every one that matches a package reported by 'pip freeze'. \
The matching '<name>==<version>' lines are written to the output file.")]
#[command(after_help = "EXAMPLES:

    # Scan the current directory and write requirements.txt
    reqgen

    # Scan a specific directory
    reqgen ./my-project

    # Write to a different file
    reqgen ./my-project -o deps.txt

    # Skip virtual environments and caches
    reqgen --exclude .venv --exclude __pycache__

    # Use a different package manager executable
    reqgen --pip pip3

    # Print the run summary as JSON
    reqgen --format json

    # Create a default configuration file (.reqgen.toml)
    reqgen --init")]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "DIR", help = "Directory to scan for Python files (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Output file
    #[arg(short, long, value_name = "FILE", help = "Requirements file to write (defaults to requirements.txt)")]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .reqgen.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Create a default configuration file
    #[arg(long, help = "Create a default configuration file (.reqgen.toml) in the current directory")]
    pub init: bool,

    /// Exclude patterns
    #[arg(long, value_name = "PATTERN", help = "Glob pattern for files or directories to skip (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Maximum depth
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse")]
    pub max_depth: Option<usize>,

    /// Follow symlinks
    #[arg(long, help = "Follow symbolic links during directory traversal")]
    pub follow_links: bool,

    /// Source suffix
    #[arg(long, value_name = "SUFFIX", help = "Suffix of the files to scan (defaults to .py)")]
    pub suffix: Option<String>,

    /// Package manager
    #[arg(long, value_name = "PROGRAM", help = "Package manager executable to run 'freeze' with (defaults to pip)")]
    pub pip: Option<String>,

    /// Summary format
    #[arg(long, value_enum, value_name = "FORMAT", help = "Format of the summary printed after the run")]
    pub format: Option<SummaryArg>,

    /// Quiet mode
    #[arg(short, long, overrides_with = "verbose", help = "Only print the final summary")]
    pub quiet: bool,

    /// Verbose mode
    #[arg(short, long, overrides_with = "quiet", help = "Print every scanned file and run statistics")]
    pub verbose: bool,

    /// Disable colors
    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    /// Disable progress
    #[arg(long, help = "Disable the spinner shown while the package manager runs")]
    pub no_progress: bool,
}

/// Summary format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryArg {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV listing of the written requirements
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
