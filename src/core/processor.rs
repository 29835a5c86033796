//! The extraction pipeline: parse, write, optionally delete.
//!
//! Each step is its own function so callers can stop after any of them:
//!
//! 1. [`extract_messages`] - read the export and collect non-empty texts
//! 2. [`write_messages`] - persist them in the chosen [`OutputFormat`]
//! 3. [`remove_input`] - irreversibly delete the source file
//!
//! [`compress`] chains all three according to a [`CompressConfig`]. Deletion
//! only happens after the output file has been fully written and closed, so a
//! [`CompressError::Delete`] always means both files are on disk.

use std::fs;
use std::path::Path;

use crate::config::CompressConfig;
use crate::error::{CompressError, Result};
use crate::format::{OutputFormat, write_to_format};
use crate::message::MessageList;
use crate::parser::ExportParser;

/// Reads the chat export at `path` and returns its non-empty message texts
/// in request order.
///
/// ```rust,no_run
/// # fn main() -> chatcompress::Result<()> {
/// use chatcompress::core::extract_messages;
///
/// let messages = extract_messages("chat.json")?;
/// println!("{} messages", messages.len());
/// # Ok(())
/// # }
/// ```
pub fn extract_messages<P: AsRef<Path>>(path: P) -> Result<MessageList> {
    let export = ExportParser::new().parse(path.as_ref())?;
    Ok(export.into_messages())
}

/// Writes `messages` to `output` in `format`, creating or truncating the file.
pub fn write_messages<P: AsRef<Path>>(
    messages: &MessageList,
    output: P,
    format: OutputFormat,
) -> Result<()> {
    write_to_format(messages, output, format)
}

/// Deletes the input file.
///
/// This cannot be undone and no backup is made. Call it only once the output
/// has been written.
pub fn remove_input<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::remove_file(path).map_err(|e| CompressError::delete(path, e))
}

/// Statistics about a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressionStats {
    /// Requests found in the export
    pub total_requests: usize,
    /// Messages written to the output
    pub extracted: usize,
    /// Size of the input file
    pub input_bytes: u64,
    /// Size of the output file
    pub output_bytes: u64,
    /// Whether the input file was deleted
    pub input_removed: bool,
}

impl CompressionStats {
    /// Requests that carried no usable text.
    pub fn skipped(&self) -> usize {
        self.total_requests.saturating_sub(self.extracted)
    }

    /// Size reduction from input to output, in percent.
    ///
    /// Returns 0.0 for an empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        (1.0 - (self.output_bytes as f64 / self.input_bytes as f64)) * 100.0
    }
}

/// Runs the full pipeline described by `config`.
///
/// # Errors
///
/// - [`CompressError::InvalidConfig`] if deletion is requested and input and
///   output name the same file; nothing is touched in that case
/// - [`CompressError::Read`] / [`CompressError::Parse`] for a missing or
///   malformed input; no output is created
/// - [`CompressError::Write`] if the output cannot be written
/// - [`CompressError::Delete`] if the input cannot be removed; the output has
///   already been written
pub fn compress(config: &CompressConfig) -> Result<CompressionStats> {
    if config.delete_input && same_file(&config.input, &config.output) {
        return Err(CompressError::invalid_config(format!(
            "refusing to delete {} because it is also the output file",
            config.input.display()
        )));
    }

    let input_bytes = fs::metadata(&config.input)
        .map_err(|e| CompressError::read(&config.input, e))?
        .len();

    let export = ExportParser::new().parse(&config.input)?;
    let total_requests = export.request_count();
    let messages = export.into_messages();

    write_messages(&messages, &config.output, config.format)?;

    let output_bytes = fs::metadata(&config.output)
        .map_err(|e| CompressError::write(&config.output, e))?
        .len();

    if config.delete_input {
        remove_input(&config.input)?;
    }

    Ok(CompressionStats {
        total_requests,
        extracted: messages.len(),
        input_bytes,
        output_bytes,
        input_removed: config.delete_input,
    })
}

/// Whether two paths refer to the same file.
///
/// Falls back to comparing the paths literally when either cannot be
/// resolved (e.g. the output does not exist yet).
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
