//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReqgenError, Result};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ReqgenError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ReqgenError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| ReqgenError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(scan_path) = &settings.scan_path {
        if scan_path.as_os_str().is_empty() {
            return Err(ReqgenError::config_error(format!(
                "Invalid empty scan_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(ReqgenError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(suffix) = &settings.source_suffix {
        if suffix.is_empty() {
            return Err(ReqgenError::config_error(format!(
                "Invalid empty source_suffix in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(ReqgenError::config_error(format!(
                    "Empty exclude pattern in config file: {}",
                    path.display()
                )));
            }

            glob::Pattern::new(pattern).map_err(|e| {
                ReqgenError::config_error(format!(
                    "Invalid exclude pattern '{}' in config file: {}: {}",
                    pattern,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    if let Some(0) = settings.max_depth {
        return Err(ReqgenError::config_error(format!(
            "Invalid max_depth 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if let Some(program) = &settings.package_manager {
        if program.trim().is_empty() {
            return Err(ReqgenError::config_error(format!(
                "Invalid empty package_manager in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let current_dir_config = PathBuf::from(super::file::DEFAULT_CONFIG_FILE);
    if current_dir_config.exists() {
        return Ok(Some(parse_config_file(current_dir_config)?));
    }

    if let Some(home_dir) = dirs::home_dir() {
        let home_config = home_dir.join(super::file::DEFAULT_CONFIG_FILE);
        if home_config.exists() {
            return Ok(Some(parse_config_file(home_config)?));
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let xdg_config = config_dir.join("reqgen").join("config.toml");
        if xdg_config.exists() {
            return Ok(Some(parse_config_file(xdg_config)?));
        }
    }

    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ReqgenError::io_error)?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config).map_err(ReqgenError::io_error)?;

    Ok(())
}
