//! Unified error types for chatstats.
//!
//! A single [`ChatstatsError`] enum covers every failure the library can
//! report. Only file access, user-supplied arguments and report writing can
//! fail: a transcript line that does not parse is not an error, it is simply
//! skipped by the loader.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading a transcript or writing a report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript file does not exist.
    ///
    /// Kept apart from [`Io`](Self::Io) so callers can tell "nothing to load"
    /// from "loaded, but nothing parsed".
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// The path that was requested
        path: PathBuf,
    },

    /// The transcript is not valid UTF-8 text.
    #[error("File is not valid UTF-8 text: {}", path.display())]
    InvalidEncoding {
        /// The offending file
        path: PathBuf,
    },

    /// Invalid date in a filter argument.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A value did not match any known format (e.g. an unknown output
    /// file extension).
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a file-not-found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        ChatstatsError::FileNotFound { path: path.into() }
    }

    /// Creates an invalid encoding error.
    pub fn invalid_encoding(path: impl Into<PathBuf>) -> Self {
        ChatstatsError::InvalidEncoding { path: path.into() }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Maps an I/O error raised while opening `path` to the matching variant.
    pub(crate) fn from_read(err: io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::file_not_found(path),
            io::ErrorKind::InvalidData => Self::invalid_encoding(path),
            _ => ChatstatsError::Io(err),
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if the requested file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChatstatsError::FileNotFound { .. })
    }

    /// Returns `true` if this is an encoding error.
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, ChatstatsError::InvalidEncoding { .. })
    }

    /// Returns `true` if this is an invalid date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }
}
