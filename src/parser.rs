//! The chatlog ingestion pipeline.
//!
//! [`ChatlogParser`] ties the stages together: encoding repair, line
//! classification, session segmentation, message assembly, speaker
//! classification, thematic tagging, and noise filtering. One parser
//! instance is reusable across files; all per-file state lives on the
//! stack of [`parse_bytes`](ChatlogParser::parse_bytes), so separate files
//! can be processed by separate instances in parallel with nothing shared.
//!
//! # Example
//!
//! ```rust
//! use chatsift::{ChatlogParser, Speaker, config::ParserConfig};
//!
//! # fn main() -> chatsift::Result<()> {
//! let parser = ChatlogParser::new(ParserConfig::dutch().with_self_names(["Daan"]))?;
//!
//! let transcript = parser.parse_str(
//!     "| Session Start: May 1 2006\n\
//!      [20:15] Alice: hi there\n\
//!      [20:16] Daan: hey!\n",
//! );
//!
//! assert_eq!(transcript.len(), 2);
//! let roles: Vec<Speaker> = transcript.iter().map(|m| m.speaker()).collect();
//! assert_eq!(roles, vec![Speaker::Counterpart, Speaker::SelfAccount]);
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;

use crate::config::{ParserConfig, PreSessionPolicy};
use crate::dates::SessionDateParser;
use crate::encoding::normalize_bytes;
use crate::error::{ParseWarning, Result};
use crate::filter::remove_noise;
use crate::line::{classify_line, LineKind};
use crate::message::Message;
use crate::speaker::classify_speaker;
use crate::tagger::ThematicTagger;
use crate::transcript::Transcript;

/// Extracts `[<time>]<speaker-segment>:<message-body>` from a message line.
const MESSAGE_PATTERN: &str = r"^\[([0-9:]*)\](.*?):(.*)";

/// Mutable segmentation state, carried across the lines of one file.
#[derive(Debug, Clone, Copy)]
struct SessionState {
    current_date: Option<NaiveDate>,
    participants: i32,
}

impl SessionState {
    fn new() -> Self {
        Self {
            current_date: None,
            participants: -1,
        }
    }
}

/// The continuation cursor: where the most recently assembled message
/// lives. One slot for the whole file, deliberately independent of session
/// boundaries — a continuation directly after a session marker extends the
/// previous session's last message.
#[derive(Debug, Clone, Copy)]
enum LastSlot {
    None,
    Undated(usize),
    Dated(NaiveDate, usize),
}

/// Parser for legacy messenger plain-text chat-log exports.
///
/// Construction compiles the message pattern and the configured keyword
/// matchers once; parsing itself cannot fail for well-formed invocations
/// and surfaces per-line faults as [`warnings`](Transcript::warnings).
pub struct ChatlogParser {
    config: ParserConfig,
    message_pattern: Regex,
    date_parser: SessionDateParser,
    tagger: ThematicTagger,
}

impl ChatlogParser {
    /// Creates a parser from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidPattern`](crate::ChatsiftError::InvalidPattern)
    /// when a configured weekday keyword does not compile.
    pub fn new(config: ParserConfig) -> Result<Self> {
        let tagger = ThematicTagger::from_config(&config)?;
        let date_parser = SessionDateParser::new(config.secondary_locale);
        Ok(Self {
            config,
            message_pattern: Regex::new(MESSAGE_PATTERN).expect("static pattern compiles"),
            date_parser,
            tagger,
        })
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a log file from disk.
    ///
    /// The file name is *not* interpreted; callers that use it as an
    /// account identifier do so themselves.
    pub fn parse(&self, path: &Path) -> Result<Transcript> {
        let bytes = fs::read(path)?;
        Ok(self.parse_bytes(&bytes))
    }

    /// Parses raw file bytes, repairing the encoding first.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Transcript {
        self.parse_str(&normalize_bytes(bytes))
    }

    /// Parses already-normalized text.
    pub fn parse_str(&self, content: &str) -> Transcript {
        let mut transcript = Transcript::new();
        let mut state = SessionState::new();
        let mut last = LastSlot::None;

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            match classify_line(line, &self.config.session_markers) {
                LineKind::SessionStart { date_text } => {
                    match self.date_parser.parse(&date_text) {
                        Some(date) => {
                            state.current_date = Some(date);
                            transcript.open_session(date);
                        }
                        // Keep the previous date: defaulting to "now" would
                        // misattribute the whole session.
                        None => transcript.push_warning(ParseWarning::UnparsableDate {
                            line: line_no,
                            raw: date_text,
                        }),
                    }
                    state.participants = -1;
                }
                LineKind::ParticipantMarker => state.participants += 1,
                LineKind::MessageStart => {
                    let message = self.assemble(line, state.participants);
                    last = self.place(&mut transcript, &state, message);
                }
                LineKind::Continuation => match last {
                    LastSlot::None => {
                        transcript.push_warning(ParseWarning::OrphanContinuation { line: line_no });
                    }
                    slot => {
                        if let Some(message) = last_message_mut(&mut transcript, slot) {
                            message.push_continuation(line);
                        }
                    }
                },
                LineKind::Other => {}
            }
        }

        if self.tagger.is_enabled() {
            for message in transcript.iter_mut() {
                message.status = self.tagger.tag(&message.text);
            }
        }

        remove_noise(&mut transcript, &self.config);
        transcript
    }

    /// Builds one message from a `[`-prefixed line.
    ///
    /// Colon-bearing display names are rewritten to their placeholders
    /// before matching so the name's internal colon is not taken for the
    /// speaker/body delimiter. A line the pattern cannot match at all
    /// becomes an `Automated` message carrying the whole line, which the
    /// noise filter drops later; nothing is lost silently.
    fn assemble(&self, line: &str, participants: i32) -> Message {
        let mut rewritten = line.to_string();
        for (name, placeholder) in &self.config.colon_names {
            rewritten = rewritten.replace(name.as_str(), placeholder.as_str());
        }

        match self.message_pattern.captures(&rewritten) {
            Some(caps) => {
                let time = &caps[1];
                let segment = &caps[2];
                let body = caps[3].trim();
                Message::new(time, body)
                    .with_speaker(classify_speaker(segment, participants, &self.config))
            }
            None => Message::new("", line),
        }
    }

    /// Routes an assembled message to its bucket and returns the new
    /// continuation cursor.
    fn place(
        &self,
        transcript: &mut Transcript,
        state: &SessionState,
        message: Message,
    ) -> LastSlot {
        match state.current_date {
            Some(date) => {
                let bucket = transcript.by_date.entry(date).or_default();
                bucket.push(message.with_date(date));
                LastSlot::Dated(date, bucket.len() - 1)
            }
            None => match self.config.pre_session {
                PreSessionPolicy::Keep => {
                    transcript.undated.push(message);
                    LastSlot::Undated(transcript.undated.len() - 1)
                }
                PreSessionPolicy::Discard => LastSlot::None,
            },
        }
    }
}

fn last_message_mut(transcript: &mut Transcript, slot: LastSlot) -> Option<&mut Message> {
    match slot {
        LastSlot::None => None,
        LastSlot::Undated(index) => transcript.undated.get_mut(index),
        LastSlot::Dated(date, index) => transcript
            .by_date
            .get_mut(&date)
            .and_then(|bucket| bucket.get_mut(index)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{SpecialStatus, Speaker};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parser(config: ParserConfig) -> ChatlogParser {
        ChatlogParser::new(config).unwrap()
    }

    #[test]
    fn test_basic_scenario() {
        let p = parser(ParserConfig::dutch());
        let t = p.parse_str(
            "| Session Start: 2006-05-01\n[20:15] Alice: hi there\n   how are you\n",
        );

        assert_eq!(t.session_count(), 1);
        let messages = &t.by_date()[&date(2006, 5, 1)];
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].time(), "20:15");
        assert_eq!(messages[0].text(), "hi there how are you");
        assert_eq!(messages[0].speaker(), Speaker::Counterpart);
        assert_eq!(messages[0].date(), Some(date(2006, 5, 1)));
    }

    #[test]
    fn test_self_attribution() {
        let p = parser(ParserConfig::dutch().with_self_names(["Daan"]));
        let t = p.parse_str("| Session Start: 2006-05-01\n[20:15] Daan: hoi\n");
        assert_eq!(t.iter().next().unwrap().speaker(), Speaker::SelfAccount);
    }

    #[test]
    fn test_colon_name_not_missplit() {
        let p = parser(ParserConfig::dutch().with_colon_names([("A:B", "A_B")]));
        let t = p.parse_str("| Session Start: 2006-05-01\n[20:15] A:B: hello\n");
        let msg = t.iter().next().unwrap();
        assert_eq!(msg.text(), "hello");
        assert_eq!(msg.time(), "20:15");
    }

    #[test]
    fn test_malformed_message_line_becomes_automated() {
        let p = parser(ParserConfig::dutch());
        // no colon after the bracket: the pattern cannot match
        let t = p.parse_str("| Session Start: 2006-05-01\n[garbled line without delimiter\n");
        // dropped by the noise filter, but the session bucket remains
        assert!(t.is_empty());
        assert_eq!(t.session_count(), 1);
    }

    #[test]
    fn test_group_role_when_participants_exceed_two() {
        let p = parser(ParserConfig::dutch().with_self_names(["Daan"]));
        let t = p.parse_str(
            "| Session Start: 2006-05-01\n\
             | Daan (daan@example.net)\n\
             | Alice (alice@example.net)\n\
             | Bob (bob@example.net)\n\
             | Carol (carol@example.net)\n\
             [20:15] Daan: hoi allemaal\n",
        );
        assert_eq!(t.iter().next().unwrap().speaker(), Speaker::Group);
    }

    #[test]
    fn test_participant_count_resets_per_session() {
        let p = parser(ParserConfig::dutch());
        let t = p.parse_str(
            "| Session Start: 2006-05-01\n\
             | a\n| b\n| c\n| d\n\
             [20:15] Alice: group msg\n\
             | Session Start: 2006-05-02\n\
             | a\n| b\n\
             [10:00] Alice: one-on-one\n",
        );
        let first = &t.by_date()[&date(2006, 5, 1)][0];
        let second = &t.by_date()[&date(2006, 5, 2)][0];
        assert_eq!(first.speaker(), Speaker::Group);
        assert_eq!(second.speaker(), Speaker::Counterpart);
    }

    #[test]
    fn test_continuation_crosses_session_boundary() {
        // The continuation cursor is global: a wrapped line that lands
        // after the next session marker still extends the message it
        // belongs to.
        let p = parser(ParserConfig::dutch());
        let t = p.parse_str(
            "| Session Start: 2006-05-01\n\
             [23:59] Alice: first part\n\
             | Session Start: 2006-05-02\n   \
             second part\n\
             [00:01] Alice: fresh message\n",
        );
        assert_eq!(
            t.by_date()[&date(2006, 5, 1)][0].text(),
            "first part second part"
        );
        assert_eq!(t.by_date()[&date(2006, 5, 2)][0].text(), "fresh message");
    }

    #[test]
    fn test_pre_session_keep_policy() {
        let p = parser(ParserConfig::dutch());
        let t = p.parse_str("[20:15] Alice: early bird\n| Session Start: 2006-05-01\n");
        assert_eq!(t.undated().len(), 1);
        assert_eq!(t.undated()[0].date(), None);
    }

    #[test]
    fn test_pre_session_discard_policy() {
        let config = ParserConfig::dutch().with_pre_session(PreSessionPolicy::Discard);
        let p = parser(config);
        let t = p.parse_str(
            "[20:15] Alice: early bird\n   wrapped orphan\n| Session Start: 2006-05-01\n",
        );
        assert!(t.undated().is_empty());
        // the continuation had nowhere to go
        assert!(t
            .warnings()
            .iter()
            .any(|w| matches!(w, ParseWarning::OrphanContinuation { .. })));
    }

    #[test]
    fn test_unparseable_date_keeps_previous_and_warns() {
        let p = parser(ParserConfig::dutch());
        let t = p.parse_str(
            "| Session Start: 2006-05-01\n\
             [20:15] Alice: on may first\n\
             | Session Start: onzin datum\n\
             [21:00] Alice: still may first\n",
        );
        assert_eq!(t.session_count(), 1);
        assert_eq!(t.by_date()[&date(2006, 5, 1)].len(), 2);
        assert!(t
            .warnings()
            .iter()
            .any(|w| matches!(w, ParseWarning::UnparsableDate { .. })));
    }

    #[test]
    fn test_dutch_session_marker_and_date() {
        let p = parser(ParserConfig::dutch());
        let t = p.parse_str("| Start van sessie: zaterdag 13 mei 2006\n[12:00] Bram: hoi\n");
        assert_eq!(t.by_date()[&date(2006, 5, 13)].len(), 1);
    }

    #[test]
    fn test_automated_notice_filtered() {
        let p = parser(ParserConfig::dutch());
        let t = p.parse_str(
            "| Session Start: 2006-05-01\n\
             [20:15] Alice is nu Afwezig: \n\
             [20:16] Alice: echte tekst\n",
        );
        assert_eq!(t.len(), 1);
        assert_eq!(t.iter().next().unwrap().text(), "echte tekst");
    }

    #[test]
    fn test_tagging_pass_runs_when_configured() {
        let config = ParserConfig::dutch()
            .with_weekday_keywords([(SpecialStatus::Tuesday, vec!["victor"])]);
        let p = parser(config);
        let t = p.parse_str(
            "| Session Start: 2006-05-01\n\
             [20:15] Alice: victor was erbij\n\
             [20:16] Alice: victorious niet\n",
        );
        let messages = &t.by_date()[&date(2006, 5, 1)];
        assert_eq!(messages[0].status(), SpecialStatus::Tuesday);
        assert_eq!(messages[1].status(), SpecialStatus::None);
    }

    #[test]
    fn test_empty_session_keeps_bucket() {
        let p = parser(ParserConfig::dutch());
        let t = p.parse_str("| Session Start: 2006-05-01\n");
        assert_eq!(t.session_count(), 1);
        assert!(t.is_empty());
    }

    #[test]
    fn test_idempotence() {
        let input = "| Session Start: 2006-05-01\n[20:15] Alice: hi\n   there\n";
        let p = parser(ParserConfig::dutch());
        assert_eq!(p.parse_str(input), p.parse_str(input));
    }

    #[test]
    fn test_time_with_seconds_preserved_verbatim() {
        let p = parser(ParserConfig::dutch());
        let t = p.parse_str("| Session Start: 2006-05-01\n[20:15:33] Alice: hi\n");
        assert_eq!(t.iter().next().unwrap().time(), "20:15:33");
    }
}
