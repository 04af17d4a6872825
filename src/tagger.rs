//! Thematic tagging of assembled messages.
//!
//! Scans message text against the configured per-weekday keyword sets and
//! annotates a [`SpecialStatus`]. Keywords are whole-word, case-insensitive
//! matches over accent-folded text, so "Andrés" still matches a configured
//! "andres". The pass is optional: with no keyword sets configured it is
//! skipped entirely.

use std::collections::HashMap;

use regex::Regex;

use crate::config::ParserConfig;
use crate::error::{ChatsiftError, Result};
use crate::message::SpecialStatus;

/// Compiled keyword matcher for the tagging pass.
///
/// Keyword fragments are compiled once at construction. Candidate sets are
/// evaluated in configured order and every match is applied, so when more
/// than one set matches the last one in iteration order stands — a
/// deliberate re-scan tie-break, not a priority scheme.
#[derive(Debug)]
pub struct ThematicTagger {
    fold_table: HashMap<char, char>,
    sets: Vec<(SpecialStatus, Vec<Regex>)>,
}

impl ThematicTagger {
    /// Compiles the tagger from the configured keyword sets.
    ///
    /// # Errors
    ///
    /// Returns [`ChatsiftError::InvalidPattern`] when a keyword fragment
    /// does not compile as a regex.
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        let mut sets = Vec::with_capacity(config.weekday_keywords.len());
        for (status, keywords) in &config.weekday_keywords {
            let mut compiled = Vec::with_capacity(keywords.len());
            for keyword in keywords {
                let pattern = format!(r"(?i)\b({keyword})\b");
                let regex = Regex::new(&pattern)
                    .map_err(|e| ChatsiftError::invalid_pattern(keyword, e))?;
                compiled.push(regex);
            }
            sets.push((*status, compiled));
        }

        Ok(Self {
            fold_table: config.fold_table.iter().copied().collect(),
            sets,
        })
    }

    /// Returns `true` if any keyword set is configured.
    pub fn is_enabled(&self) -> bool {
        !self.sets.is_empty()
    }

    /// Returns the tag for a message body, or `SpecialStatus::None`.
    pub fn tag(&self, text: &str) -> SpecialStatus {
        let folded = self.fold(text);
        let mut status = SpecialStatus::None;
        for (candidate, patterns) in &self.sets {
            if patterns.iter().any(|p| p.is_match(&folded)) {
                status = *candidate;
            }
        }
        status
    }

    fn fold(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.fold_table.get(&c).copied().unwrap_or(c))
            .collect()
    }
}
