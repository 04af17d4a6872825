//! The date-grouped output structure handed to the persistence layer.
//!
//! A [`Transcript`] owns every message the pipeline produced for one input
//! file: a map from calendar date to the ordered messages of that session
//! day, an undated bucket for messages that preceded any session marker,
//! and the warnings collected along the way. The persistence collaborator
//! assigns identity and sequence numbers; the pipeline never does.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ParseWarning;
use crate::message::Message;

/// Date-grouped, source-ordered message records for one conversation
/// partner.
///
/// # Example
///
/// ```rust
/// use chatsift::{ChatlogParser, config::ParserConfig};
///
/// # fn main() -> chatsift::Result<()> {
/// let parser = ChatlogParser::new(ParserConfig::dutch())?;
/// let transcript = parser.parse_str("| Session Start: May 1 2006\n[20:15] Alice: hi\n");
///
/// for (date, messages) in transcript.by_date() {
///     println!("{date}: {} messages", messages.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Messages grouped by session date, each bucket in source order.
    /// A session marker opens its bucket even when no message follows.
    pub(crate) by_date: BTreeMap<NaiveDate, Vec<Message>>,

    /// Messages that appeared before any session marker.
    pub(crate) undated: Vec<Message>,

    /// Recoverable faults encountered while parsing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) warnings: Vec<ParseWarning>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the date-grouped messages.
    pub fn by_date(&self) -> &BTreeMap<NaiveDate, Vec<Message>> {
        &self.by_date
    }

    /// Returns the messages that preceded any session marker.
    pub fn undated(&self) -> &[Message] {
        &self.undated
    }

    /// Returns the warnings collected while parsing.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Returns the total number of messages across all buckets.
    pub fn len(&self) -> usize {
        self.undated.len() + self.by_date.values().map(Vec::len).sum::<usize>()
    }

    /// Returns `true` if no messages were produced.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of distinct session dates.
    pub fn session_count(&self) -> usize {
        self.by_date.len()
    }

    /// Iterates over every message: the undated bucket first, then the
    /// dated buckets in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.undated.iter().chain(self.by_date.values().flatten())
    }

    /// Mutably iterates over every message, same order as [`iter`](Self::iter).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Message> {
        self.undated
            .iter_mut()
            .chain(self.by_date.values_mut().flatten())
    }

    /// Keeps only the messages for which the predicate holds. Buckets stay
    /// in place even when emptied, matching the session-opening semantics.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Message) -> bool,
    {
        self.undated.retain(|m| keep(m));
        for messages in self.by_date.values_mut() {
            messages.retain(|m| keep(m));
        }
    }

    /// Merges another transcript into this one, appending per-date buckets
    /// in order. Used when several export files cover the same partner.
    pub fn merge(&mut self, other: Transcript) {
        for (date, messages) in other.by_date {
            self.by_date.entry(date).or_default().extend(messages);
        }
        self.undated.extend(other.undated);
        self.warnings.extend(other.warnings);
    }

    /// Consumes the transcript, returning the date-grouped map. The
    /// undated bucket and warnings are dropped; call this only after
    /// deciding what to do with them.
    pub fn into_by_date(self) -> BTreeMap<NaiveDate, Vec<Message>> {
        self.by_date
    }

    pub(crate) fn open_session(&mut self, date: NaiveDate) {
        self.by_date.entry(date).or_default();
    }

    pub(crate) fn push_warning(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = Box<dyn Iterator<Item = &'a Message> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
