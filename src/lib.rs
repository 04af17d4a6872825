//! # Chatsift
//!
//! A Rust library for sifting legacy desktop-messenger chat-log exports
//! into clean, dated, classified message records.
//!
//! ## Overview
//!
//! A legacy messenger client wrote one plain-text log per conversation
//! partner: inconsistently encoded, localized session banners (English and
//! Dutch), long messages wrapped onto indented continuation lines, display
//! names that can contain the very colon used as the speaker delimiter,
//! and a steady drizzle of auto-generated status notices. Chatsift turns
//! those files into a date-grouped sequence of typed [`Message`] records
//! ready for storage:
//!
//! raw bytes → normalized lines → classified lines → segmented sessions →
//! assembled messages → speaker-tagged → thematically-tagged → filtered.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatsift::{ChatlogParser, config::ParserConfig};
//! use std::path::Path;
//!
//! fn main() -> chatsift::Result<()> {
//!     let config = ParserConfig::dutch().with_self_names(["Daan", "daan_v"]);
//!     let parser = ChatlogParser::new(config)?;
//!
//!     let transcript = parser.parse(Path::new("alice@example.net.txt"))?;
//!
//!     for (date, messages) in transcript.by_date() {
//!         println!("{date}: {} messages", messages.len());
//!     }
//!
//!     for warning in transcript.warnings() {
//!         eprintln!("review: {warning}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatlogParser`], the pipeline orchestrator
//! - [`transcript`] — [`Transcript`], the date-grouped output structure
//! - [`message`] — [`Message`], [`Speaker`], [`SpecialStatus`]
//! - [`config`] — [`ParserConfig`](config::ParserConfig) and presets
//! - [`encoding`] — byte-stream repair to clean UTF-8
//! - [`line`] — per-line classification
//! - [`dates`] — session-date parsing strategies
//! - [`speaker`] — speaker role attribution
//! - [`tagger`] — thematic keyword tagging
//! - [`filter`] — noise removal
//! - [`output`] — JSON/JSONL writers (feature `json-output`)
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — [`ChatsiftError`], [`Result`], [`ParseWarning`](error::ParseWarning)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dates;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod line;
pub mod message;
#[cfg(feature = "json-output")]
pub mod output;
pub mod parser;
pub mod speaker;
pub mod tagger;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::{Message, SpecialStatus, Speaker};
pub use parser::ChatlogParser;
pub use transcript::Transcript;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{ChatlogParser, Message, SpecialStatus, Speaker, Transcript};

    // Error types
    pub use crate::error::{ChatsiftError, ParseWarning, Result};

    // Configuration
    pub use crate::config::{ParserConfig, PreSessionPolicy};
    pub use crate::dates::DateLocale;

    // Pipeline stages, for callers composing their own flow
    pub use crate::encoding::normalize_bytes;
    pub use crate::filter::remove_noise;
    pub use crate::line::{classify_line, LineKind};
    pub use crate::speaker::classify_speaker;
    pub use crate::tagger::ThematicTagger;

    // Output writers
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};

    // CLI types
    #[cfg(feature = "cli")]
    pub use crate::cli::OutputFormat;
}
