//! Data models and structures for reqgen

pub mod config;
pub mod package;
pub mod report;

pub use config::{PartialSettings, Settings, SummaryFormat};
pub use package::{InstalledPackage, InstalledPackages, RequirementEntry};
pub use report::{GenerationReport, ScanWarning};
