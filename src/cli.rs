//! Command-line interface definition using clap.
//!
//! [`Args`] parses the command line and converts into a
//! [`CompressConfig`] for the library pipeline. With no arguments the tool
//! reads `chat.json`, writes a JSON array to `chat_compressed.json` and
//! prints nothing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{CompressConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::error::CompressError;

/// Extract user message texts from a chat export into a compact file.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatcompress")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatcompress
    chatcompress export.json -o messages.json
    chatcompress export.json -f jsonl
    chatcompress export.json -f jsonl --delete-input
    chatcompress export.json -v")]
pub struct Args {
    /// Path to the chat export
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format [default: taken from the output file extension]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Delete the input file after the output is written (irreversible)
    #[arg(long)]
    pub delete_input: bool,

    /// Print a progress report and summary
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - pretty-printed array (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - one JSON string per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// JSON array of strings
    #[default]
    Json,

    /// JSON Lines - one string literal per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

impl TryFrom<&Args> for CompressConfig {
    type Error = CompressError;

    /// Without `--format`, the format comes from the output extension
    /// (`.json`, `.jsonl`, `.ndjson`); any other extension is an error.
    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let format = match args.format {
            Some(format) => format.into(),
            None => crate::format::OutputFormat::from_path(&args.output)?,
        };

        Ok(CompressConfig::new()
            .with_input(args.input.clone())
            .with_output(args.output.clone())
            .with_format(format)
            .with_delete_input(args.delete_input))
    }
}
