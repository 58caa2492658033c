//! Parsing functionality for source files and package listings

pub mod freeze;
pub mod imports;

pub use freeze::{parse_freeze_line, parse_freeze_output};
pub use imports::{ImportExtractor, RegexImportExtractor};
