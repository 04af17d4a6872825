//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatsift::cli::{Args, OutputFormat};
use chatsift::config::{ParserConfig, PreSessionPolicy};
use chatsift::output::{write_json, write_jsonl};
use chatsift::{ChatlogParser, ChatsiftError, Transcript};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatsiftError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let config = build_config(&args)?;
    let parser = ChatlogParser::new(config)?;

    if !args.quiet {
        println!("📜 chatsift v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Inputs:  {}", args.inputs.len());
        println!("💾 Output:  {}", args.output);
        println!("📄 Format:  {}", args.format);
        println!();
    }

    let mut combined = Transcript::new();
    let mut warning_count = 0usize;

    for input in &args.inputs {
        let path = Path::new(input);
        let account = path
            .file_stem()
            .map_or_else(|| input.clone(), |s| s.to_string_lossy().into_owned());

        let parse_start = Instant::now();
        let transcript = parser.parse(path)?;

        for warning in transcript.warnings() {
            eprintln!("⚠️  {}: {}", account, warning);
            warning_count += 1;
        }

        if !args.quiet {
            println!(
                "⏳ {}: {} messages over {} dates ({:.2}s)",
                account,
                transcript.len(),
                transcript.session_count(),
                parse_start.elapsed().as_secs_f64()
            );
        }

        combined.merge(transcript);
    }

    if !args.quiet {
        println!("💾 Writing {}...", args.format);
    }
    match args.format {
        OutputFormat::Json => write_json(&combined, Path::new(&args.output))?,
        OutputFormat::Jsonl => write_jsonl(&combined, Path::new(&args.output))?,
    }

    if !args.quiet {
        println!();
        println!("✅ Done! Output saved to {}", args.output);
        println!();
        println!("📊 Summary:");
        println!("   Messages:  {}", combined.len());
        println!("   Dates:     {}", combined.session_count());
        println!("   Undated:   {}", combined.undated().len());
        if warning_count > 0 {
            println!("   Warnings:  {}", warning_count);
        }
        println!();
        println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    }

    Ok(())
}

/// Builds the parser configuration from the config file (or the Dutch
/// preset) plus the command-line overrides.
fn build_config(args: &Args) -> Result<ParserConfig, ChatsiftError> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ParserConfig::dutch(),
    };

    if !args.self_names.is_empty() {
        config = config.with_self_names(args.self_names.clone());
    }
    if args.discard_presession {
        config = config.with_pre_session(PreSessionPolicy::Discard);
    }

    Ok(config)
}
