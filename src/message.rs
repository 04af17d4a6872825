//! The normalized message record produced by the pipeline.
//!
//! This module provides [`Message`], the typed record every pipeline stage
//! works on, together with the two closed classification enums
//! [`Speaker`] and [`SpecialStatus`].
//!
//! # Overview
//!
//! A message consists of:
//! - **date**: the calendar date of the session the message belongs to
//!   (`None` for messages that appeared before any session marker)
//! - **time**: the wall-clock time string exactly as found in the source
//! - **speaker**: who produced the message ([`Speaker`])
//! - **status**: an optional thematic tag ([`SpecialStatus`])
//! - **text**: the accumulated message body
//!
//! # Examples
//!
//! ```
//! use chatsift::{Message, Speaker};
//! use chrono::NaiveDate;
//!
//! let msg = Message::new("20:15", "hi there")
//!     .with_date(NaiveDate::from_ymd_opt(2006, 5, 1).unwrap())
//!     .with_speaker(Speaker::Counterpart);
//!
//! assert_eq!(msg.time(), "20:15");
//! assert_eq!(msg.text(), "hi there");
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatsift::Message;
//!
//! let msg = Message::new("20:15", "hello");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: Message = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who a message originated from.
///
/// The variant set is fixed: classification and filtering match on it
/// exhaustively. The raw integer encoding ([`as_raw`](Speaker::as_raw) /
/// [`from_raw`](Speaker::from_raw)) matches the column values the
/// persistence layer stores, where `Automated` never survives to a row
/// because the noise filter removes those messages first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// Message written by the account owner themselves.
    SelfAccount,

    /// Message written by the conversation partner.
    Counterpart,

    /// Message from a multi-party conversation, not attributed further.
    Group,

    /// Auto-generated notice (status change, system message).
    Automated,
}

impl Speaker {
    /// Returns the stable integer encoding used by the persistence layer.
    pub fn as_raw(self) -> u8 {
        match self {
            Speaker::SelfAccount => 0,
            Speaker::Counterpart => 1,
            Speaker::Group => 2,
            Speaker::Automated => 3,
        }
    }

    /// Builds a speaker from its raw integer encoding.
    ///
    /// Returns `None` for values outside the known range.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Speaker::SelfAccount),
            1 => Some(Speaker::Counterpart),
            2 => Some(Speaker::Group),
            3 => Some(Speaker::Automated),
            _ => None,
        }
    }
}

impl Default for Speaker {
    fn default() -> Self {
        Speaker::Automated
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::SelfAccount => write!(f, "self"),
            Speaker::Counterpart => write!(f, "counterpart"),
            Speaker::Group => write!(f, "group"),
            Speaker::Automated => write!(f, "automated"),
        }
    }
}

/// Thematic tag attached when the message text matches a configured
/// per-weekday keyword set.
///
/// `None` is the default; the tagger only ever upgrades it. Raw encoding
/// mirrors [`Speaker`]'s persistence convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialStatus {
    /// No thematic keyword matched.
    #[default]
    None,

    /// Matched the Tuesday keyword set.
    Tuesday,

    /// Matched the Wednesday keyword set.
    Wednesday,
}

impl SpecialStatus {
    /// Returns the stable integer encoding used by the persistence layer.
    pub fn as_raw(self) -> u8 {
        match self {
            SpecialStatus::None => 0,
            SpecialStatus::Tuesday => 1,
            SpecialStatus::Wednesday => 2,
        }
    }

    /// Builds a status from its raw integer encoding.
    ///
    /// Returns `None` for values outside the known range.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(SpecialStatus::None),
            1 => Some(SpecialStatus::Tuesday),
            2 => Some(SpecialStatus::Wednesday),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpecialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialStatus::None => write!(f, "none"),
            SpecialStatus::Tuesday => write!(f, "tuesday"),
            SpecialStatus::Wednesday => write!(f, "wednesday"),
        }
    }
}

/// A single normalized chat message.
///
/// Created by the assembler when a timestamped line is recognized, extended
/// by continuation lines, annotated by the speaker and tagging passes, and
/// immutable once the noise filter has run.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `date` | `Option<NaiveDate>` | Session date; `None` before any session marker |
/// | `time` | `String` | Time-of-day as found in the source; empty if malformed |
/// | `speaker` | [`Speaker`] | Role attribution |
/// | `status` | [`SpecialStatus`] | Thematic tag, default `None` |
/// | `text` | `String` | Accumulated message body |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Calendar date of the enclosing session.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Wall-clock time string as exported, brackets stripped.
    pub time: String,

    /// Who produced the message.
    #[serde(default)]
    pub speaker: Speaker,

    /// Thematic tag from the weekday keyword sets.
    #[serde(default)]
    pub status: SpecialStatus,

    /// Message body; continuations are joined with single spaces.
    pub text: String,
}

impl Message {
    /// Creates a new message with the given time and initial body.
    ///
    /// Date defaults to `None`, speaker to [`Speaker::Automated`] (the
    /// assembler always overwrites it for well-formed lines), status to
    /// [`SpecialStatus::None`].
    pub fn new(time: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            date: None,
            time: time.into(),
            speaker: Speaker::default(),
            status: SpecialStatus::default(),
            text: text.into(),
        }
    }

    /// Builder method to set the session date.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Builder method to set the speaker role.
    #[must_use]
    pub fn with_speaker(mut self, speaker: Speaker) -> Self {
        self.speaker = speaker;
        self
    }

    /// Builder method to set the special status tag.
    #[must_use]
    pub fn with_status(mut self, status: SpecialStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns the session date, if one was known at assembly time.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns the time-of-day string.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the speaker role.
    pub fn speaker(&self) -> Speaker {
        self.speaker
    }

    /// Returns the special status tag.
    pub fn status(&self) -> SpecialStatus {
        self.status
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Appends a continuation line to the body.
    ///
    /// The line is trimmed of its own leading/trailing whitespace and
    /// joined with exactly one space, matching the way the export format
    /// wraps long messages.
    pub fn push_continuation(&mut self, line: &str) {
        self.text.push(' ');
        self.text.push_str(line.trim());
    }

    /// Returns `true` if this message was classified as auto-generated.
    pub fn is_automated(&self) -> bool {
        self.speaker == Speaker::Automated
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
