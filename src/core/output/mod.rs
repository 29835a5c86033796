//! Output format writers.
//!
//! - [`write_json`] / [`to_json`] - pretty-printed JSON array of strings
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one string literal per line
//!
//! The `to_*` functions return exactly the bytes the matching `write_*`
//! function puts on disk. Both formats are ASCII-only: other characters are
//! written as `\uXXXX` escapes (surrogate pairs above U+FFFF).
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatcompress::Result<()> {
//! use chatcompress::core::output::{to_jsonl, write_json};
//! use chatcompress::MessageList;
//!
//! let messages = MessageList::from(vec!["hi".to_string(), "bye".to_string()]);
//!
//! write_json(&messages, "chat_compressed.json")?;
//! assert_eq!(to_jsonl(&messages)?, "\"hi\"\n\"bye\"\n");
//! # Ok(())
//! # }
//! ```

mod ascii;
mod json_writer;
mod jsonl_writer;

pub use json_writer::{to_json, write_json};
pub use jsonl_writer::{to_jsonl, write_jsonl};
