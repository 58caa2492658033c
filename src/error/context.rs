//! Error context utilities for reqgen
//!
//! This module provides utilities for adding context to errors and handling
//! errors in a consistent way throughout the application.

use crate::error::{ErrorSeverity, ReqgenError, Result};
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let dyn_err: &(dyn std::error::Error + 'static) = &err;
            if let Some(io_err) = dyn_err.downcast_ref::<std::io::Error>() {
                return ReqgenError::source_read(
                    path.as_ref(),
                    std::io::Error::new(io_err.kind(), io_err.to_string()),
                );
            }

            ReqgenError::directory_traversal_error(path.as_ref(), err.to_string())
        })
    }
}

/// Handle an error based on its severity
///
/// - Warning: Log the error and return None
/// - Error: Log the error and return None
/// - Critical: Return Some(error) for the caller to report
pub fn handle_error(err: ReqgenError) -> Option<ReqgenError> {
    match err.severity() {
        ErrorSeverity::Warning => {
            eprintln!("Warning: {}", err.user_message());
            None
        }
        ErrorSeverity::Error => {
            eprintln!("Error: {}", err.user_message());
            None
        }
        ErrorSeverity::Critical => Some(err),
    }
}
