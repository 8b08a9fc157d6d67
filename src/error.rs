//! Error types for semgrep-report.

use std::path::PathBuf;
use thiserror::Error;

/// I/O operation types, used to qualify [`ReportError::Io`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    Read,
    Write,
}

impl std::fmt::Display for IoOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// Unified error type for all semgrep-report operations.
///
/// Every variant is fatal: the run terminates with a non-zero exit code and
/// none of them is retried. Missing or malformed fields inside an otherwise
/// valid finding record are not errors at all; they resolve to defaults during
/// normalization.
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O operation failed.
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON.
    #[error("Failed to parse JSON in {path}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Input parsed as JSON but its top-level shape is not a findings document.
    #[error("Invalid input shape in {path}: {message}")]
    InvalidShape { path: PathBuf, message: String },

    /// Caller requested an unknown render target.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// No usable HTML-to-PDF engine could be located.
    #[error("PDF engine not found: {0} (install wkhtmltopdf or pass --pdf-engine)")]
    PdfEngineNotFound(String),

    /// The HTML-to-PDF engine ran and reported failure.
    #[error("PDF engine {engine} failed: {message}")]
    PdfRender { engine: String, message: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// Create an I/O read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Read,
            source,
        }
    }

    /// Create an I/O write error.
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Write,
            source,
        }
    }

    /// Create a malformed-input error for a JSON parse failure.
    pub fn malformed_input(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::MalformedInput {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-shape error.
    pub fn invalid_shape(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidShape {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for semgrep-report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
