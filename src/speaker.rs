//! Speaker role attribution.
//!
//! Decides whether a message came from the account owner, the conversation
//! partner, an unattributed group participant, or an automated notice.

use crate::config::ParserConfig;
use crate::message::Speaker;

/// Classifies the raw speaker segment of a message line.
///
/// Conversations with more than two participant markers are group chats
/// and are not attributed to individuals. Otherwise the segment is scanned
/// against the configured self-name variants (case-sensitive substring
/// match), defaulting to the counterpart. The automated-phrase scan runs
/// last and overrides everything: status-change lines can incidentally
/// contain a participant's name.
pub fn classify_speaker(segment: &str, participants: i32, config: &ParserConfig) -> Speaker {
    let mut speaker = Speaker::Counterpart;

    if participants > 2 {
        speaker = Speaker::Group;
    } else if config
        .self_names
        .iter()
        .any(|name| segment.contains(name.as_str()))
    {
        speaker = Speaker::SelfAccount;
    }

    if config
        .noise_phrases
        .iter()
        .any(|phrase| segment.contains(phrase.as_str()))
    {
        speaker = Speaker::Automated;
    }

    speaker
}
