//! Matching found modules against installed packages
//!
//! Module names and distribution names follow different conventions
//! (`yaml_include` vs `yaml-include`, `Flask` vs `flask`). Both sides are
//! reduced to a normalized key and compared for exact equality.

use crate::models::package::{InstalledPackages, RequirementEntry};
use std::collections::{BTreeSet, HashSet};

/// Lowercase `name` and map `-` to `_`
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('-', "_")
}

/// Installed packages whose normalized name equals the normalized name of a
/// found module, in ascending canonical-name order.
pub fn match_requirements(
    found: &BTreeSet<String>,
    installed: &InstalledPackages,
) -> Vec<RequirementEntry> {
    let found_keys: HashSet<String> = found.iter().map(|module| normalize_name(module)).collect();

    installed
        .iter()
        .filter(|package| found_keys.contains(&normalize_name(&package.name)))
        .map(RequirementEntry::from)
        .collect()
}

/// Found modules with no installed package, sorted
pub fn unmatched_modules(found: &BTreeSet<String>, installed: &InstalledPackages) -> Vec<String> {
    let installed_keys: HashSet<String> = installed
        .iter()
        .map(|package| normalize_name(&package.name))
        .collect();

    found
        .iter()
        .filter(|module| !installed_keys.contains(&normalize_name(module)))
        .cloned()
        .collect()
}
