//! Unified error types for chatcompress.
//!
//! Every failure the extractor can hit maps to one [`CompressError`] variant:
//!
//! - **Read** - the input file is missing or unreadable
//! - **Parse** - the input is not syntactically valid JSON
//! - **Write** - the output file cannot be created or written
//! - **Delete** - the output was written but the input could not be removed
//!
//! Nothing is recovered locally. A `Delete` error means the output file is
//! already populated and the input still exists.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for chatcompress operations.
///
/// # Example
///
/// ```rust
/// use chatcompress::error::Result;
/// use chatcompress::MessageList;
///
/// fn my_function() -> Result<MessageList> {
///     Ok(MessageList::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, CompressError>;

/// The error type for all chatcompress operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompressError {
    /// The input file could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the input file
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input is not valid JSON.
    #[error("Failed to parse chat export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The file path, if the content came from a file
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// The output file could not be created, written or flushed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Path of the output file
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output was written but the input file could not be removed.
    ///
    /// Both files are left on disk.
    #[error("Output written, but failed to delete input {}: {source}", path.display())]
    Delete {
        /// Path of the input file that is still present
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O error without path context.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The run settings contradict each other.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the conflict
        message: String,
    },

    /// Unknown output format name or file extension.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being resolved (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl CompressError {
    /// Creates a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CompressError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error, optionally tied to a file.
    pub fn parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        CompressError::Parse { path, source }
    }

    /// Creates a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CompressError::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a delete error for `path`.
    pub fn delete(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CompressError::Delete {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        CompressError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        CompressError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if the input could not be read.
    pub fn is_read(&self) -> bool {
        matches!(self, CompressError::Read { .. })
    }

    /// Returns `true` if the input was not valid JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self, CompressError::Parse { .. })
    }

    /// Returns `true` if the output could not be written.
    pub fn is_write(&self) -> bool {
        matches!(self, CompressError::Write { .. })
    }

    /// Returns `true` if the input could not be deleted after writing.
    pub fn is_delete(&self) -> bool {
        matches!(self, CompressError::Delete { .. })
    }

    /// Returns `true` if this is a bare IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, CompressError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, CompressError::InvalidFormat { .. })
    }

    /// Returns `true` if the run settings were rejected.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, CompressError::InvalidConfig { .. })
    }

    /// Returns the file path involved in the failure, if known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CompressError::Read { path, .. }
            | CompressError::Write { path, .. }
            | CompressError::Delete { path, .. } => Some(path),
            CompressError::Parse { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
