//! Installed-package listing
//!
//! The only package source is the package manager's freeze listing. A
//! failure to run it ends the run.

use crate::error::{ReqgenError, Result};
use crate::models::config::Settings;
use crate::models::package::InstalledPackages;
use crate::parsers::freeze::parse_freeze_output;
use std::process::Command;

/// Something that can report which packages are installed
pub trait PackageSource {
    /// Installed packages keyed by canonical name
    fn installed_packages(&self) -> Result<InstalledPackages>;

    /// Human-readable description, used in progress messages
    fn describe(&self) -> String;
}

/// Runs `pip freeze` (or a configured equivalent) and parses its stdout
#[derive(Debug, Clone)]
pub struct PipFreeze {
    program: String,
    args: Vec<String>,
}

impl PipFreeze {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.package_manager.clone(), settings.freeze_args.clone())
    }

    /// Program and arguments joined for messages
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for PipFreeze {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl PackageSource for PipFreeze {
    fn installed_packages(&self) -> Result<InstalledPackages> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| ReqgenError::PackageManagerInvoke {
                command: self.command_line(),
                source,
            })?;

        if !output.status.success() {
            return Err(ReqgenError::PackageManagerFailed {
                command: self.command_line(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(parse_freeze_output(&String::from_utf8_lossy(&output.stdout)))
    }

    fn describe(&self) -> String {
        self.command_line()
    }
}
