//! # chatcompress
//!
//! Extracts the user message texts from a chat export JSON document and
//! writes them to a compact file.
//!
//! ## Input
//!
//! ```json
//! { "requests": [ { "message": { "text": "Hello" } }, { "message": { "text": "" } } ] }
//! ```
//!
//! Only `requests[*].message.text` is read. Requests whose text is missing,
//! not a string, or empty are skipped; everything else keeps its order.
//! Missing or wrong-typed fields are never an error.
//!
//! ## Output
//!
//! - [`OutputFormat::Json`](format::OutputFormat::Json) - one JSON array,
//!   2-space indent, trailing newline (default)
//! - [`OutputFormat::Jsonl`](format::OutputFormat::Jsonl) - one JSON string
//!   per line
//!
//! The input can optionally be deleted after the output is written. That
//! step is off by default and cannot be undone.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatcompress::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = CompressConfig::new()
//!         .with_input("chat.json")
//!         .with_output("chat_compressed.jsonl")
//!         .with_format(OutputFormat::Jsonl);
//!
//!     let stats = compress(&config)?;
//!     println!("{} of {} requests had text", stats.extracted, stats.total_requests);
//!     Ok(())
//! }
//! ```
//!
//! ## Step by step
//!
//! ```rust,no_run
//! use chatcompress::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let messages = extract_messages("chat.json")?;
//!     write_messages(&messages, "chat_compressed.json", OutputFormat::Json)?;
//!     remove_input("chat.json")?; // irreversible
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`export`] - [`ChatExport`], [`Request`]: defensive data model
//! - [`message`] - [`MessageList`]
//! - [`parser`] - [`ExportParser`](parser::ExportParser)
//! - [`format`] - [`OutputFormat`](format::OutputFormat), [`write_to_format`](format::write_to_format)
//! - [`core`] - writers and the pipeline ([`compress`](core::compress))
//! - [`config`] - [`CompressConfig`](config::CompressConfig)
//! - [`cli`] - clap argument definitions (feature `cli`)
//! - [`error`] - [`CompressError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod format;
pub mod message;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use crate::core::processor::CompressionStats;
pub use error::{CompressError, Result};
pub use export::{ChatExport, Request};
pub use message::MessageList;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatcompress::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageList;

    pub use crate::error::{CompressError, Result};

    pub use crate::export::{ChatExport, Request};
    pub use crate::parser::ExportParser;

    pub use crate::config::CompressConfig;
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::core::processor::{
        CompressionStats, compress, extract_messages, remove_input, write_messages,
    };
}
