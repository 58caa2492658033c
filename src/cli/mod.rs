//! Command-line interface components

pub mod args;
pub mod commands;

pub use args::{Args, SummaryArg};
pub use commands::Command;
