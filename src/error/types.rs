//! Error types and definitions for repolens
//!
//! Provides the error taxonomy for the analysis pipeline: fatal retrieval
//! failures, per-file read failures that are always recovered, and the
//! degradable insight failure, plus the usual configuration and output
//! errors.

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

/// Main error type for repolens operations
#[derive(Debug, Error)]
pub enum LensError {
    /// Remote repository could not be fetched (bad URL, unreachable host,
    /// nonexistent repository, auth failure, timeout)
    #[error("failed to retrieve repository {url}: {reason}")]
    Retrieval { url: String, reason: String },

    /// A single file could not be read during scanning or extraction
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text-generation collaborator is unreachable or misconfigured
    #[error("insight provider unavailable: {reason}")]
    InsightUnavailable { reason: String },

    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization errors
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid output format
    #[error("invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// History store errors
    #[error("history store error: {message}")]
    Storage { message: String },

    /// Analysis errors with free-form context
    #[error("analysis error: {message}")]
    Analysis { message: String },

    /// Output file write errors
    #[error("error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },
}

impl LensError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - the affected file degrades, the run continues
            LensError::Read { .. } => ErrorSeverity::Warning,
            LensError::InsightUnavailable { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            LensError::Config { .. } => ErrorSeverity::Critical,
            LensError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            LensError::ConfigRead { .. } => ErrorSeverity::Critical,
            LensError::ConfigParse { .. } => ErrorSeverity::Critical,
            LensError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            LensError::StdoutWrite { .. } => ErrorSeverity::Critical,

            // Regular errors - the current run fails
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
            LensError::Retrieval { url, reason } => {
                format!(
                    "Could not fetch '{}': {}. Check that the URL is correct and the repository is reachable.",
                    url, reason
                )
            }
            LensError::Read { path, source } => {
                format!("Cannot read '{}': {}. The file is skipped.", path.display(), source)
            }
            LensError::InsightUnavailable { reason } => {
                format!("Insight generation is unavailable: {}. The profile is still produced.", reason)
            }
            LensError::JsonParse { file, source } => {
                format!("Invalid JSON in '{}': {}. Please check the file format.", file.display(), source)
            }
            LensError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            LensError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create a config file or use command line options.",
                    path.display()
                )
            }
            LensError::Storage { message } => {
                format!("History store error: {}. Check the history file path and permissions.", message)
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create a retrieval error for a source URL
    pub fn retrieval(url: impl Into<String>, reason: impl Into<String>) -> Self {
        LensError::Retrieval {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a per-file read error
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LensError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create an insight-unavailable error
    pub fn insight_unavailable(reason: impl Into<String>) -> Self {
        LensError::InsightUnavailable {
            reason: reason.into(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        LensError::Io { source }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        LensError::JsonParse {
            file: file.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        LensError::Config {
            message: message.into(),
        }
    }

    /// Create a history store error
    pub fn storage_error(message: impl Into<String>) -> Self {
        LensError::Storage {
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for LensError {
    fn from(err: std::io::Error) -> Self {
        LensError::io_error(err)
    }
}

impl From<toml::de::Error> for LensError {
    fn from(err: toml::de::Error) -> Self {
        LensError::ConfigParse {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for LensError {
    fn from(err: serde_json::Error) -> Self {
        LensError::JsonSerialize { source: err }
    }
}

/// Result type alias for repolens operations
pub type Result<T> = std::result::Result<T, LensError>;
