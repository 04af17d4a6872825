//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! These types are designed to be usable outside of CLI context:
//!
//! ```rust
//! use chatsift::cli::OutputFormat;
//!
//! let format = OutputFormat::Jsonl;
//! assert_eq!(format.extension(), "jsonl");
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Sift legacy messenger chat-log exports into clean, dated,
/// classified message records.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift alice@example.net.txt
    chatsift chatlogs/*.txt -o archive.json
    chatsift export.txt --format jsonl --self Daan --self daan_v
    chatsift export.txt --config tables.json --discard-presession")]
pub struct Args {
    /// Input chat-log files, one per conversation partner. The file stem
    /// is reported as the account identifier.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Path to output file
    #[arg(short, long, default_value = "transcript.json")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Parser configuration file (JSON-serialized ParserConfig);
    /// defaults to the Dutch-dialect preset
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Name variant under which you appear as a speaker (repeatable)
    #[arg(long = "self", value_name = "NAME")]
    pub self_names: Vec<String>,

    /// Drop messages that appear before any session marker instead of
    /// keeping them in the undated bucket
    #[arg(long)]
    pub discard_presession: bool,

    /// Suppress per-file progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format options.
///
/// - [`Json`](OutputFormat::Json) - one date-grouped document (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - one message per line, for streaming
///   ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Date-grouped JSON document (default)
    #[default]
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "jsonl", "ndjson"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}
