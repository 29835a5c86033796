//! # chatcompress CLI
//!
//! Command-line interface for chatcompress library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatcompress::CompressError;
use chatcompress::cli::Args;
use chatcompress::config::CompressConfig;
use chatcompress::core::compress;
use chatcompress::parser::ExportParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), CompressError> {
    let args = <Args as ClapParser>::parse();
    let config = CompressConfig::try_from(&args)?;

    if !args.verbose {
        compress(&config)?;
        return Ok(());
    }

    // Print header
    println!("📦 chatcompress v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", config.input.display());
    println!("💾 Output:  {}", config.output.display());
    println!("📄 Format:  {}", config.format);
    if config.delete_input {
        println!("🗑️  Delete:  input is removed after writing");
    }
    println!();

    println!("⏳ Extracting from {}...", ExportParser::new().name());
    let start = Instant::now();
    let stats = compress(&config)?;
    let elapsed = start.elapsed();

    println!(
        "   Found {} messages in {} requests ({:.2}s)",
        stats.extracted,
        stats.total_requests,
        elapsed.as_secs_f64()
    );
    if stats.input_removed {
        println!("🗑️  Deleted {}", config.input.display());
    }

    println!();
    println!("✅ Done! Output saved to {}", config.output.display());

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Requests:  {}", stats.total_requests);
    println!("   Skipped:   {} (no text)", stats.skipped());
    println!("   Written:   {} messages", stats.extracted);
    println!(
        "   Size:      {} → {} bytes ({:.1}% reduction)",
        stats.input_bytes,
        stats.output_bytes,
        stats.compression_ratio()
    );

    Ok(())
}
