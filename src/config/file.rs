//! Configuration file and environment variable sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{ReqgenError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".reqgen.toml";

/// Default prefix for environment variables
pub const DEFAULT_ENV_PREFIX: &str = "REQGEN";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(ReqgenError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
}

impl EnvConfig {
    const KEYS: [&'static str; 6] = [
        "SCAN_PATH",
        "OUTPUT",
        "EXCLUDE",
        "MAX_DEPTH",
        "PIP",
        "FORMAT",
    ];

    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = self.var("SCAN_PATH") {
            settings.scan_path = Some(PathBuf::from(path));
        }

        if let Some(output) = self.var("OUTPUT") {
            settings.output_file = Some(PathBuf::from(output));
        }

        if let Some(exclude) = self.var("EXCLUDE") {
            settings.exclude_patterns = Some(
                exclude
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }

        if let Some(max_depth) = self.var("MAX_DEPTH") {
            let depth = max_depth.trim().parse().map_err(|_| {
                ReqgenError::config_error(format!(
                    "{}_MAX_DEPTH must be a positive integer, got '{}'",
                    self.prefix, max_depth
                ))
            })?;
            settings.max_depth = Some(depth);
        }

        if let Some(program) = self.var("PIP") {
            settings.package_manager = Some(program);
        }

        if let Some(format) = self.var("FORMAT") {
            let format = format.parse().map_err(|_| ReqgenError::InvalidSummaryFormat {
                format: format.clone(),
            })?;
            settings.summary_format = Some(format);
        }

        parser::validate_partial_settings(&settings, &self.name)?;

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        Self::KEYS.iter().any(|key| self.var(key).is_some())
    }
}
