//! Validation of fully merged settings

use crate::error::{ReqgenError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid.
    ///
    /// The scan path is not checked here; the walker reports a missing
    /// directory when the scan starts.
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.source_suffix.is_empty() {
            return Err(ReqgenError::config_error("Source suffix must not be empty"));
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                ReqgenError::config_error(format!("Invalid exclude pattern '{}': {}", pattern, e))
            })?;
        }

        if let Some(0) = settings.max_depth {
            return Err(ReqgenError::config_error("Max depth must be at least 1"));
        }

        if settings.package_manager.trim().is_empty() {
            return Err(ReqgenError::config_error(
                "Package manager command must not be empty",
            ));
        }

        if settings.output_file.as_os_str().is_empty() {
            return Err(ReqgenError::config_error("Output file must not be empty"));
        }

        Ok(())
    }
}
