//! Chat export parser.
//!
//! [`ExportParser`] loads a JSON document fully into memory and turns it into
//! a [`ChatExport`]. Syntax errors fail; shape mismatches do not (see
//! [`ChatExport::from_value`]).
//!
//! # Example
//!
//! ```rust
//! use chatcompress::parser::ExportParser;
//!
//! let parser = ExportParser::new();
//! let export = parser.parse_str(r#"{"requests": [{"message": {"text": "hi"}}]}"#)?;
//! assert_eq!(export.messages().as_slice(), &["hi"]);
//! # Ok::<(), chatcompress::CompressError>(())
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{CompressError, Result};
use crate::export::ChatExport;

/// Parser for chat export JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportParser;

impl ExportParser {
    pub fn new() -> Self {
        Self
    }

    /// Human-readable name of the input format.
    pub fn name(&self) -> &'static str {
        "Chat export JSON"
    }

    /// Reads and parses the file at `path`.
    ///
    /// The file handle is closed before parsing starts.
    ///
    /// # Errors
    ///
    /// - [`CompressError::Read`] if the file does not exist or is unreadable
    /// - [`CompressError::Parse`] if the content is not valid JSON
    pub fn parse(&self, path: &Path) -> Result<ChatExport> {
        let bytes = fs::read(path).map_err(|e| CompressError::read(path, e))?;
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| CompressError::parse(e, Some(path.to_path_buf())))?;
        Ok(ChatExport::from_value(&value))
    }

    /// Parses an export held in memory.
    pub fn parse_str(&self, content: &str) -> Result<ChatExport> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| CompressError::parse(e, None))?;
        Ok(ChatExport::from_value(&value))
    }

    /// Parses an export from any reader.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<ChatExport> {
        let value: Value =
            serde_json::from_reader(reader).map_err(|e| CompressError::parse(e, None))?;
        Ok(ChatExport::from_value(&value))
    }
}
