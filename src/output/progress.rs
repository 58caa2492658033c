//! Progress reporting functionality
//!
//! All console chatter of a run goes through [`ProgressReporter`], which
//! honours quiet and verbose modes.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for the stages of a run
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    show_spinner: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool, verbose: bool, show_spinner: bool) -> Self {
        Self {
            quiet,
            verbose: verbose && !quiet,
            show_spinner: show_spinner && !quiet,
        }
    }

    /// A reporter that prints nothing but warnings and errors
    pub fn silent() -> Self {
        Self::new(true, false, false)
    }

    /// Start a spinner for a blocking operation
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_spinner {
            return None;
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        Some(spinner)
    }

    /// Print a message (respects quiet mode)
    pub fn print(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Print a verbose message (only in verbose mode)
    pub fn print_verbose(&self, message: &str) {
        if self.verbose {
            println!("{}", message);
        }
    }

    /// Print a warning message (always printed, even in quiet mode)
    pub fn print_warning(&self, message: &str) {
        eprintln!("Warning: {}", message);
    }

    /// Print an error message (always printed, even in quiet mode)
    pub fn print_error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(false, false, true)
    }
}
