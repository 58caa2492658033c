//! reqgen - a requirements.txt generator for Python projects
//!
//! This library scans a directory tree for Python source files, extracts the
//! top-level modules they import, and pins every module that matches a package
//! reported by the package manager's freeze listing.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use core::{Generator, PackageSource, PipFreeze, Stage};
pub use error::{handle_error, ErrorSeverity, ReqgenError, Result, ResultExt};
pub use models::{
    config::{Settings, SummaryFormat},
    package::{InstalledPackage, InstalledPackages, RequirementEntry},
    report::{GenerationReport, ScanWarning},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
