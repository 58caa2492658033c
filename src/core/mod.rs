//! Core functionality: walking, listing, matching and the run pipeline

pub mod generator;
pub mod matcher;
pub mod packages;
pub mod walker;

pub use generator::{Generator, Stage};
pub use matcher::{match_requirements, normalize_name, unmatched_modules};
pub use packages::{PackageSource, PipFreeze};
pub use walker::SourceWalker;
