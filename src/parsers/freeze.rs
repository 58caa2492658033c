//! Parser for `pip freeze` style listings

use crate::models::package::{InstalledPackage, InstalledPackages};

/// Separator between package name and pinned version
pub const VERSION_SEPARATOR: &str = "==";

/// Parse a single listing line.
///
/// Returns `None` for lines without a `==` pin, such as editable installs,
/// comments, `name @ url` references and blank lines.
pub fn parse_freeze_line(line: &str) -> Option<InstalledPackage> {
    let line = line.trim();
    let (name, version) = line.split_once(VERSION_SEPARATOR)?;

    Some(InstalledPackage {
        name: name.to_lowercase(),
        version: version.to_string(),
        raw: line.to_string(),
    })
}

/// Parse a whole listing. Later duplicates replace earlier ones.
pub fn parse_freeze_output(output: &str) -> InstalledPackages {
    output.lines().filter_map(parse_freeze_line).collect()
}
