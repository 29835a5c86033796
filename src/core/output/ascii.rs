//! ASCII-only JSON encoding.
//!
//! Every character outside printable ASCII is written as a `\uXXXX` escape,
//! with characters above U+FFFF split into a UTF-16 surrogate pair. Hex digits
//! are lowercase. Control characters below 0x20 keep serde_json's own escapes.

use std::io;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

use crate::error::{CompressError, Result};

/// A [`Formatter`] that delegates layout to `F` and escapes non-ASCII text.
pub(crate) struct AsciiFormatter<F> {
    inner: F,
}

impl AsciiFormatter<PrettyFormatter<'static>> {
    /// Two-space indented layout.
    pub(crate) fn pretty() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl AsciiFormatter<CompactFormatter> {
    /// Single-line layout.
    pub(crate) fn compact() -> Self {
        Self {
            inner: CompactFormatter,
        }
    }
}

impl<F: Formatter> Formatter for AsciiFormatter<F> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if is_plain_ascii(ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Printable ASCII, i.e. space through `~`. DEL (0x7f) is escaped too.
fn is_plain_ascii(ch: char) -> bool {
    (' '..='~').contains(&ch)
}

/// Serializes `value` to an ASCII-only JSON string using `formatter`.
pub(crate) fn to_ascii_string<T, F>(value: &T, formatter: AsciiFormatter<F>) -> Result<String>
where
    T: ?Sized + Serialize,
    F: Formatter,
{
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf)
        .map_err(|e| CompressError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
