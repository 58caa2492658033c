//! Error types and definitions for reqgen
//!
//! Every failure the pipeline can hit is a variant of [`ReqgenError`]. The
//! severity of a variant decides whether the run stops or only warns.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for reqgen operations
#[derive(Debug, Error)]
pub enum ReqgenError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// The directory to scan does not exist
    #[error("directory '{}' not found", .path.display())]
    ScanPathNotFound { path: PathBuf },

    /// Directory traversal errors
    #[error("Directory traversal error for {}: {message}", .path.display())]
    DirectoryTraversal { path: PathBuf, message: String },

    /// A single source file could not be read
    #[error("Could not parse {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The package manager could not be started or its output not collected
    #[error("failed to run '{command}': {source}")]
    PackageManagerInvoke {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The package manager ran but reported failure
    #[error("failed to run '{command}': {status}{}", format_stderr(.stderr))]
    PackageManagerFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Output file create/write errors
    #[error("Error writing to output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Invalid summary format
    #[error("Invalid summary format: {format}")]
    InvalidSummaryFormat { format: String },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV buffer was not valid UTF-8
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

impl ReqgenError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A bad file is skipped, the scan carries on
            ReqgenError::SourceRead { .. } => ErrorSeverity::Warning,

            ReqgenError::ScanPathNotFound { .. } => ErrorSeverity::Critical,
            ReqgenError::DirectoryTraversal { .. } => ErrorSeverity::Critical,
            ReqgenError::PackageManagerInvoke { .. } => ErrorSeverity::Critical,
            ReqgenError::PackageManagerFailed { .. } => ErrorSeverity::Critical,
            ReqgenError::OutputWrite { .. } => ErrorSeverity::Critical,
            ReqgenError::Config { .. } => ErrorSeverity::Critical,
            ReqgenError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            ReqgenError::ConfigRead { .. } => ErrorSeverity::Critical,
            ReqgenError::ConfigParse { .. } => ErrorSeverity::Critical,
            ReqgenError::GlobPattern { .. } => ErrorSeverity::Critical,
            ReqgenError::InvalidSummaryFormat { .. } => ErrorSeverity::Critical,
            ReqgenError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ReqgenError::PackageManagerInvoke { command, source } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    format!(
                        "failed to run '{}': executable not found on PATH. Activate the environment that holds your packages or pass --pip.",
                        command
                    )
                } else {
                    self.to_string()
                }
            }
            ReqgenError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create one with --init or drop the --config option.",
                    path.display()
                )
            }
            ReqgenError::OutputWrite { path, source } => {
                format!(
                    "Cannot write '{}': {}. Check that the directory exists and is writable.",
                    path.display(),
                    source
                )
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        ReqgenError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        ReqgenError::Config {
            message: message.into(),
        }
    }

    /// Create an error for a missing scan directory
    pub fn scan_path_not_found(path: impl Into<PathBuf>) -> Self {
        ReqgenError::ScanPathNotFound { path: path.into() }
    }

    /// Create a per-file read error
    pub fn source_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReqgenError::SourceRead {
            path: path.into(),
            source,
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ReqgenError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReqgenError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for ReqgenError {
    fn from(err: std::io::Error) -> Self {
        ReqgenError::io_error(err)
    }
}

impl From<walkdir::Error> for ReqgenError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        ReqgenError::DirectoryTraversal {
            path,
            message: err.to_string(),
        }
    }
}

impl From<glob::PatternError> for ReqgenError {
    fn from(err: glob::PatternError) -> Self {
        ReqgenError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for ReqgenError {
    fn from(err: serde_json::Error) -> Self {
        ReqgenError::JsonSerialize { source: err }
    }
}

impl From<csv::Error> for ReqgenError {
    fn from(err: csv::Error) -> Self {
        ReqgenError::Csv { source: err }
    }
}

/// Result type alias for reqgen operations
pub type Result<T> = std::result::Result<T, ReqgenError>;
