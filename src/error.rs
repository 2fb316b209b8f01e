//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers every
//! failure the library can report.
//!
//! # What is *not* an error
//!
//! Transcript lines that do not match the export grammar, and lines whose
//! timestamp is not a valid calendar date, are dropped silently by the
//! parser. Real exports are full of wrapped message continuations and
//! localized system notices; they reduce the record count, they never abort
//! a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading the transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript file does not exist.
    #[error("File '{}' not found.", path.display())]
    FileNotFound {
        /// The path that was requested
        path: PathBuf,
    },

    /// The transcript is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Parsing finished without a single usable message.
    ///
    /// This is the one designated failure of the aggregation engine.
    #[error("No messages found in the chat")]
    EmptyTranscript,

    /// A format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
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

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a file-not-found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        ChatstatsError::FileNotFound { path: path.into() }
    }

    /// Creates a UTF-8 error with a description of what was being decoded.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: context.into(),
            source,
        }
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

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if the transcript file was missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChatstatsError::FileNotFound { .. })
    }

    /// Returns `true` if no messages survived parsing.
    pub fn is_empty_transcript(&self) -> bool {
        matches!(self, ChatstatsError::EmptyTranscript)
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }
}
