//! JSON Lines (JSONL) output writer.
//!
//! Each line is an independent JSON string literal. The file as a whole is
//! not a single JSON document. Strings use the same ASCII-only escaping as
//! the JSON array writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ascii::{AsciiFormatter, to_ascii_string};
use crate::error::{CompressError, Result};
use crate::message::MessageList;

/// Writes messages to `output_path` in JSONL format.
///
/// ```jsonl
/// "hi"
/// "bye"
/// ```
///
/// Every line, including the last, ends with `\n`. An empty list produces an
/// empty file. The writer is flushed and closed before returning.
pub fn write_jsonl<P: AsRef<Path>>(messages: &MessageList, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let file = File::create(output_path).map_err(|e| CompressError::write(output_path, e))?;
    let mut writer = BufWriter::new(file);

    for text in messages {
        let line = to_ascii_string(text, AsciiFormatter::compact())?;
        writeln!(writer, "{line}").map_err(|e| CompressError::write(output_path, e))?;
    }

    writer
        .flush()
        .map_err(|e| CompressError::write(output_path, e))?;
    Ok(())
}

/// Converts messages to the exact content [`write_jsonl`] produces.
pub fn to_jsonl(messages: &MessageList) -> Result<String> {
    let mut output = String::new();
    for text in messages {
        output.push_str(&to_ascii_string(text, AsciiFormatter::compact())?);
        output.push('\n');
    }
    Ok(output)
}
