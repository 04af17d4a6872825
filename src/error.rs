//! Unified error and warning types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum for the few
//! operations that can genuinely fail (I/O, pattern compilation, output
//! serialization), plus [`ParseWarning`] for the per-line faults the
//! pipeline is required to recover from.
//!
//! # Error Handling Philosophy
//!
//! The pipeline itself has no fatal path for a well-formed invocation:
//! encoding faults degrade to best-effort text, unparseable session dates
//! keep the previous date, and malformed message lines become `Automated`
//! records that the noise filter drops. Everything recoverable is surfaced
//! as a [`ParseWarning`] on the returned transcript so the caller can
//! review it; only setup and I/O return [`ChatsiftError`].

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A configured keyword pattern failed to compile.
    ///
    /// Weekday keyword entries are regex fragments; a malformed fragment
    /// is a configuration mistake and is reported at parser construction,
    /// never mid-parse.
    #[error("Invalid keyword pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending configured fragment
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing the grouped output.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatsiftError {
    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        ChatsiftError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is a pattern compilation error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, ChatsiftError::InvalidPattern { .. })
    }
}

/// A recoverable fault encountered while parsing a log file.
///
/// Warnings are collected on the [`Transcript`](crate::Transcript) rather
/// than aborting the file: a wrong date on one session is recoverable,
/// losing the rest of the file is not.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ParseWarning {
    /// A session-start date string was rejected by every configured
    /// parsing strategy. The previous session date stays in effect.
    #[error("line {line}: unparseable session date '{raw}'")]
    UnparsableDate {
        /// 1-based line number in the normalized input
        line: usize,
        /// The raw date text after marker stripping
        raw: String,
    },

    /// A continuation line appeared before any message had been assembled.
    /// The line is dropped.
    #[error("line {line}: continuation before any message")]
    OrphanContinuation {
        /// 1-based line number in the normalized input
        line: usize,
    },
}
