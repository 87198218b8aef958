//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lizard-tui operations
#[derive(Debug, Error)]
pub enum Error {
    /// The analyzer binary could not be started
    #[error("Analyzer '{program}' is not available: {message}")]
    AnalyzerUnavailable { program: String, message: String },

    /// The analyzer started but its output could not be collected
    #[error("Analyzer failed on {}: {message}", path.display())]
    AnalyzerFailed { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A background worker ended without delivering a result
    #[error("Worker error: {0}")]
    Worker(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an analyzer-unavailable error for a program name
    pub fn analyzer_unavailable(program: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AnalyzerUnavailable {
            program: program.into(),
            message: message.into(),
        }
    }

    /// Create an analyzer failure for a target path
    pub fn analyzer_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::AnalyzerFailed {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
