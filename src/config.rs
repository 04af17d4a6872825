//! Parser configuration.
//!
//! Everything the pipeline matches against is data, not code: self-name
//! variants, noise phrases, colon-bearing display names, the accent folding
//! table, weekday keyword sets, and the localized session markers all
//! arrive through [`ParserConfig`]. Adding an export dialect is a
//! configuration change, not a parser change.
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::ParserConfig;
//!
//! let config = ParserConfig::dutch()
//!     .with_self_names(["Daan", "daan_v"])
//!     .with_colon_names([("DJ:Ruben", "DJ_Ruben")]);
//! ```

use serde::{Deserialize, Serialize};

use crate::dates::DateLocale;
use crate::message::SpecialStatus;

/// What to do with message lines that appear before any session marker
/// has established a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreSessionPolicy {
    /// Keep the message in the transcript's undated bucket and let the
    /// caller decide (default).
    #[default]
    Keep,

    /// Drop the message at assembly time.
    Discard,
}

/// Configuration for [`ChatlogParser`](crate::ChatlogParser).
///
/// All tables are matched verbatim (substring or whole-word as each
/// classifier documents); none are computed by the pipeline.
///
/// # Presets
///
/// [`ParserConfig::new`] starts with the two session markers, the standard
/// accent folding table, and otherwise empty tables. [`ParserConfig::dutch`]
/// additionally loads the noise-phrase table for Dutch-localized exports,
/// including the space-interrupted "auto-bericht" spellings found in real
/// logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Session-start markers, matched after the leading `|` decoration.
    /// Localized clients write different markers into the same format.
    pub session_markers: Vec<String>,

    /// Name variants under which the account owner appears as a speaker.
    /// Matched case-sensitively as substrings of the speaker segment.
    pub self_names: Vec<String>,

    /// Phrases identifying auto-generated notices. Matched as substrings
    /// against both the speaker segment and the assembled message text.
    pub noise_phrases: Vec<String>,

    /// Display names containing a literal colon, paired with the
    /// colon-free placeholder to substitute before speaker extraction.
    pub colon_names: Vec<(String, String)>,

    /// Accented characters folded to their base form before keyword
    /// matching.
    pub fold_table: Vec<(char, char)>,

    /// Ordered weekday keyword sets; each keyword is a whole-word regex
    /// fragment. Empty means the tagging pass is disabled.
    pub weekday_keywords: Vec<(SpecialStatus, Vec<String>)>,

    /// Secondary locale for session-date parsing when the default English
    /// strategies fail.
    pub secondary_locale: Option<DateLocale>,

    /// Policy for message lines preceding any session marker.
    pub pre_session: PreSessionPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            session_markers: vec!["Session Start".into(), "Start van sessie".into()],
            self_names: Vec::new(),
            noise_phrases: Vec::new(),
            colon_names: Vec::new(),
            fold_table: default_fold_table(),
            weekday_keywords: Vec::new(),
            secondary_locale: Some(DateLocale::Dutch),
            pre_session: PreSessionPolicy::default(),
        }
    }
}

impl ParserConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration preloaded for Dutch-localized exports.
    ///
    /// Loads the noise-phrase table observed in real Dutch logs: the
    /// "auto-bericht" marker with every space-interrupted spelling that
    /// shows up after continuation joining, the status-change notices, and
    /// the English "auto-message" variants mixed clients produce.
    pub fn dutch() -> Self {
        Self {
            noise_phrases: dutch_noise_phrases(),
            ..Self::default()
        }
    }

    /// Sets the self-name variants.
    #[must_use]
    pub fn with_self_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.self_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the noise-phrase table.
    #[must_use]
    pub fn with_noise_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the colon-bearing display name substitutions.
    #[must_use]
    pub fn with_colon_names<I, S, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        self.colon_names = names
            .into_iter()
            .map(|(name, placeholder)| (name.into(), placeholder.into()))
            .collect();
        self
    }

    /// Sets the session-start markers.
    #[must_use]
    pub fn with_session_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.session_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the accent folding table.
    #[must_use]
    pub fn with_fold_table<I>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        self.fold_table = table.into_iter().collect();
        self
    }

    /// Sets the ordered weekday keyword sets.
    #[must_use]
    pub fn with_weekday_keywords<I, S>(mut self, sets: I) -> Self
    where
        I: IntoIterator<Item = (SpecialStatus, Vec<S>)>,
        S: Into<String>,
    {
        self.weekday_keywords = sets
            .into_iter()
            .map(|(status, words)| (status, words.into_iter().map(Into::into).collect()))
            .collect();
        self
    }

    /// Sets the secondary date-parsing locale.
    #[must_use]
    pub fn with_secondary_locale(mut self, locale: Option<DateLocale>) -> Self {
        self.secondary_locale = locale;
        self
    }

    /// Sets the pre-session message policy.
    #[must_use]
    pub fn with_pre_session(mut self, policy: PreSessionPolicy) -> Self {
        self.pre_session = policy;
        self
    }

    /// Returns `true` if the thematic tagging pass should run.
    pub fn tagging_enabled(&self) -> bool {
        !self.weekday_keywords.is_empty()
    }
}

/// Accent folding table covering the Latin-1 letters that occur in the
/// exports. Uppercase forms are not needed: keyword matching is
/// case-insensitive and the folded text is only used for matching.
fn default_fold_table() -> Vec<(char, char)> {
    vec![
        ('à', 'a'),
        ('á', 'a'),
        ('â', 'a'),
        ('ã', 'a'),
        ('ä', 'a'),
        ('å', 'a'),
        ('ç', 'c'),
        ('è', 'e'),
        ('é', 'e'),
        ('ê', 'e'),
        ('ë', 'e'),
        ('ì', 'i'),
        ('í', 'i'),
        ('î', 'i'),
        ('ï', 'i'),
        ('ñ', 'n'),
        ('ò', 'o'),
        ('ó', 'o'),
        ('ô', 'o'),
        ('õ', 'o'),
        ('ö', 'o'),
        ('ø', 'o'),
        ('ù', 'u'),
        ('ú', 'u'),
        ('û', 'u'),
        ('ý', 'y'),
        ('ÿ', 'y'),
    ]
}

/// Noise phrases for Dutch-localized exports.
///
/// The spaced "auto-bericht" spellings are not fuzzy matching: they are the
/// exact variants produced when the client wraps the marker across a
/// continuation boundary, and each one has been seen in real logs.
fn dutch_noise_phrases() -> Vec<String> {
    [
        "auto-message",
        "auto-bericht",
        "a uto-bericht",
        "au to-bericht",
        "aut o-bericht",
        "auto -bericht",
        "auto- bericht",
        "auto-b ericht",
        "auto-be richt",
        "auto-ber icht",
        "auto-beri cht",
        "auto-beric ht",
        "auto-berich t",
        "AutoMessage",
        "heeft zijn\\/haar status gewijzigd",
        "heeft zijn/haar status gewijzigd",
        "is nu Afwezig",
        "is nu Online",
        "is nu Bezet",
        "is nu Offline",
        "is nu Ben zo terug",
        "is nu Lunchpauze",
        "is nu Aan de telefoon",
        "zijn/haar naam gewijzigd",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
