//! JSON array output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::ascii::{AsciiFormatter, to_ascii_string};
use crate::error::{CompressError, Result};
use crate::message::MessageList;

/// Writes messages to `output_path` as a single JSON array.
///
/// # Format
/// ```json
/// [
///   "hi",
///   "bye"
/// ]
/// ```
/// Two-space indentation, followed by a trailing newline. Non-ASCII text is
/// written as `\uXXXX` escapes. An empty list is written as `[]` plus
/// newline. An existing file is overwritten.
pub fn write_json<P: AsRef<Path>>(messages: &MessageList, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let json = to_json(messages)?;
    let mut file = File::create(output_path).map_err(|e| CompressError::write(output_path, e))?;
    file.write_all(json.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| CompressError::write(output_path, e))?;
    Ok(())
}

/// Converts messages to the exact content [`write_json`] produces.
pub fn to_json(messages: &MessageList) -> Result<String> {
    let mut json = to_ascii_string(messages, AsciiFormatter::pretty())?;
    json.push('\n');
    Ok(json)
}
