//! Installed packages and the requirement entries derived from them

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// One line of the package manager's freeze listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
    /// Lowercased name, left of the first `==`
    pub name: String,
    /// Exact version string, right of the first `==`
    pub version: String,
    /// The whole trimmed `name==version` line
    pub raw: String,
}

/// Installed packages keyed by canonical lowercase name.
///
/// Iteration is in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstalledPackages {
    packages: BTreeMap<String, InstalledPackage>,
}

impl InstalledPackages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a package, replacing any earlier one with the same name
    pub fn insert(&mut self, package: InstalledPackage) -> Option<InstalledPackage> {
        self.packages.insert(package.name.clone(), package)
    }

    pub fn get(&self, name: &str) -> Option<&InstalledPackage> {
        self.packages.get(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Packages in ascending canonical-name order
    pub fn iter(&self) -> btree_map::Values<'_, String, InstalledPackage> {
        self.packages.values()
    }
}

impl<'a> IntoIterator for &'a InstalledPackages {
    type Item = &'a InstalledPackage;
    type IntoIter = btree_map::Values<'a, String, InstalledPackage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<InstalledPackage> for InstalledPackages {
    fn from_iter<I: IntoIterator<Item = InstalledPackage>>(iter: I) -> Self {
        let mut packages = InstalledPackages::new();
        for package in iter {
            packages.insert(package);
        }
        packages
    }
}

/// A pinned line destined for the requirements file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementEntry {
    pub name: String,
    pub version: String,
    /// Written verbatim to the output file
    pub line: String,
}

impl From<&InstalledPackage> for RequirementEntry {
    fn from(package: &InstalledPackage) -> Self {
        Self {
            name: package.name.clone(),
            version: package.version.clone(),
            line: package.raw.clone(),
        }
    }
}

impl fmt::Display for RequirementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
