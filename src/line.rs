//! Per-line classification of normalized input.
//!
//! Every raw line gets exactly one tag, checked in precedence order:
//! session-start marker, participant-separator marker, timestamped message
//! start, continuation line, anything else. The first match wins.

/// The classification of one normalized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A session-start marker; carries the date text that remains after
    /// stripping the marker and its pipe/colon decoration.
    SessionStart {
        /// Raw date text to hand to the date strategies.
        date_text: String,
    },

    /// A `|`-prefixed decoration line that is not a session start; each
    /// one bumps the participant count.
    ParticipantMarker,

    /// A `[`-prefixed line opening a new message.
    MessageStart,

    /// A space-indented line extending the previous message.
    Continuation,

    /// Blank or otherwise ignorable.
    Other,
}

/// Classifies one line against the configured session markers.
pub fn classify_line(line: &str, session_markers: &[String]) -> LineKind {
    // The leading `|` decoration is optional: some client versions write
    // the marker bare.
    let undecorated = line
        .strip_prefix('|')
        .map_or(line, |rest| rest.trim_start());
    for marker in session_markers {
        if let Some(rest) = undecorated.strip_prefix(marker.as_str()) {
            return LineKind::SessionStart {
                date_text: extract_date_text(rest),
            };
        }
    }

    if line.starts_with('|') {
        return LineKind::ParticipantMarker;
    }

    if line.starts_with('[') {
        return LineKind::MessageStart;
    }

    if line.starts_with(' ') && !line.trim().is_empty() {
        return LineKind::Continuation;
    }

    LineKind::Other
}

/// Strips the colon decoration after the marker and any pipe decoration
/// anywhere in the remainder (some clients close the banner with a
/// trailing `|`).
fn extract_date_text(rest: &str) -> String {
    let rest = rest.trim_start().strip_prefix(':').unwrap_or(rest);
    rest.replace('|', "").trim().to_string()
}
