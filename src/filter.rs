//! Noise filtering over the assembled transcript.
//!
//! Runs last, after speaker classification and tagging. Removal is
//! destructive: filtered messages do not appear in the output at all.

use crate::config::ParserConfig;
use crate::transcript::Transcript;

/// Removes automated messages and noise-phrase matches from a transcript.
///
/// Two stages, mirroring how the notices actually slip through:
/// 1. every message whose speaker was classified `Automated`;
/// 2. every remaining message whose *text* contains a configured noise
///    phrase — this catches status notices embedded mid-message after
///    continuation joining, which the speaker segment never showed.
pub fn remove_noise(transcript: &mut Transcript, config: &ParserConfig) {
    transcript.retain(|message| {
        if message.is_automated() {
            return false;
        }
        !config
            .noise_phrases
            .iter()
            .any(|phrase| message.text().contains(phrase.as_str()))
    });
}
