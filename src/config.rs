//! Configuration for a compression run.
//!
//! [`CompressConfig`] carries everything the pipeline needs, without any CLI
//! framework dependency. The defaults reproduce the plain utility behavior:
//! read `chat.json`, write a JSON array to `chat_compressed.json`, leave the
//! input in place.
//!
//! # Example
//!
//! ```rust
//! use chatcompress::config::CompressConfig;
//! use chatcompress::format::OutputFormat;
//!
//! let config = CompressConfig::new()
//!     .with_input("export.json")
//!     .with_format(OutputFormat::Jsonl)
//!     .with_delete_input(true);
//!
//! assert_eq!(config.output.to_str(), Some("chat_compressed.json"));
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Default input path.
pub const DEFAULT_INPUT: &str = "chat.json";

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "chat_compressed.json";

/// Settings for [`compress`](crate::core::processor::compress).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressConfig {
    /// Chat export to read (default: `chat.json`)
    pub input: PathBuf,

    /// File to create or overwrite (default: `chat_compressed.json`)
    pub output: PathBuf,

    /// Output shape (default: JSON array)
    #[serde(default)]
    pub format: OutputFormat,

    /// Delete the input after the output is written (default: false).
    ///
    /// Irreversible. No backup is made.
    #[serde(default)]
    pub delete_input: bool,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::Json,
            delete_input: false,
        }
    }
}

impl CompressConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input path.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enables or disables deleting the input after a successful write.
    #[must_use]
    pub fn with_delete_input(mut self, enabled: bool) -> Self {
        self.delete_input = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompressConfig::default();
        assert_eq!(config.input, PathBuf::from("chat.json"));
        assert_eq!(config.output, PathBuf::from("chat_compressed.json"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.delete_input);
    }

    #[test]
    fn test_builder() {
        let config = CompressConfig::new()
            .with_input("in.json")
            .with_output("out.jsonl")
            .with_format(OutputFormat::Jsonl)
            .with_delete_input(true);

        assert_eq!(config.input, PathBuf::from("in.json"));
        assert_eq!(config.output, PathBuf::from("out.jsonl"));
        assert_eq!(config.format, OutputFormat::Jsonl);
        assert!(config.delete_input);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = CompressConfig::new().with_format(OutputFormat::Jsonl);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CompressConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_serde_optional_fields_default() {
        let parsed: CompressConfig =
            serde_json::from_str(r#"{"input": "a.json", "output": "b.json"}"#).unwrap();
        assert_eq!(parsed.format, OutputFormat::Json);
        assert!(!parsed.delete_input);
    }
}
