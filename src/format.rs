//! Output format types.
//!
//! Two shapes are supported for the compressed file:
//!
//! - [`Json`](OutputFormat::Json) - one pretty-printed JSON array (default)
//! - [`Jsonl`](OutputFormat::Jsonl) - JSON Lines, one string per line
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatcompress::Result<()> {
//! use chatcompress::format::{OutputFormat, write_to_format};
//! use chatcompress::MessageList;
//!
//! let messages = MessageList::from(vec!["Hello!".to_string()]);
//!
//! write_to_format(&messages, "chat_compressed.json", OutputFormat::Json)?;
//!
//! // Or detect the format from the extension
//! let format = OutputFormat::from_path("chat_compressed.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::output;
use crate::error::{CompressError, Result};
use crate::message::MessageList;

/// Serialization shape of the compressed output.
///
/// ```rust
/// use chatcompress::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single JSON array, 2-space indent, trailing newline.
    #[default]
    Json,

    /// JSON Lines - one JSON string literal per line.
    ///
    /// Also known as NDJSON.
    #[serde(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson"]
    }

    /// Detects format from a file path based on extension.
    ///
    /// ```rust
    /// use chatcompress::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.ndjson").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("out.csv").is_err());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(CompressError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: json, jsonl, ndjson",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes messages to a file in the specified format.
pub fn write_to_format<P: AsRef<Path>>(
    messages: &MessageList,
    path: P,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => output::write_json(messages, path),
        OutputFormat::Jsonl => output::write_jsonl(messages, path),
    }
}

/// Converts messages to a string in the specified format.
pub fn to_format_string(messages: &MessageList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => output::to_json(messages),
        OutputFormat::Jsonl => output::to_jsonl(messages),
    }
}
