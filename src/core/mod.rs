//! Core processing logic for chatcompress.
//!
//! This module contains:
//! - [`processor`] - The extraction pipeline and run statistics
//! - [`output`] - Format writers (JSON array, JSON Lines)

pub mod output;
pub mod processor;

#[doc(inline)]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
pub use processor::{
    CompressionStats, compress, extract_messages, remove_input, write_messages,
};
