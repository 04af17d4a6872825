//! Session-date parsing strategies.
//!
//! Session markers carry a free-form date written by whichever localized
//! client produced the export. Parsing is an ordered chain of strategies
//! tried in sequence, stopping at the first success: the English textual
//! formats first, then the configured secondary locale, which translates
//! localized month and weekday names and retries the same format tables.
//! Adding a locale means adding a translation table, not a parser.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Locales supported by the secondary date-parsing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateLocale {
    /// Dutch month and weekday names ("13 mei 2006", "zaterdag").
    Dutch,
}

/// Formats that include a time-of-day component. Tried before the
/// date-only formats because chrono rejects trailing input.
const DATETIME_FORMATS: &[&str] = &[
    "%A %B %d %H:%M:%S %Y",
    "%A %B %d %Y %H:%M:%S",
    "%A %d %B %Y %H:%M:%S",
    "%B %d %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%A %B %d %Y",
    "%A %d %B %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d-%m-%Y",
    "%d/%m/%Y",
];

const DUTCH_MONTHS: &[(&str, &str)] = &[
    ("januari", "january"),
    ("februari", "february"),
    ("maart", "march"),
    ("mei", "may"),
    ("juni", "june"),
    ("juli", "july"),
    ("augustus", "august"),
    ("oktober", "october"),
];

const DUTCH_WEEKDAYS: &[(&str, &str)] = &[
    ("maandag", "monday"),
    ("dinsdag", "tuesday"),
    ("woensdag", "wednesday"),
    ("donderdag", "thursday"),
    ("vrijdag", "friday"),
    ("zaterdag", "saturday"),
    ("zondag", "sunday"),
];

/// Parses session-marker date strings via the ordered strategy chain.
#[derive(Debug, Clone)]
pub struct SessionDateParser {
    secondary: Option<DateLocale>,
}

impl SessionDateParser {
    /// Creates a parser with the given secondary locale strategy.
    pub fn new(secondary: Option<DateLocale>) -> Self {
        Self { secondary }
    }

    /// Attempts every strategy in order; `None` means all of them failed
    /// and the caller should keep its previous session date.
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        // Collapse runs of whitespace: ctime-style dates pad the day.
        let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if cleaned.is_empty() {
            return None;
        }

        parse_formats(&cleaned).or_else(|| {
            self.secondary
                .map(|locale| translate(&cleaned, locale))
                .and_then(|translated| parse_formats(&translated))
        })
    }
}

fn parse_formats(text: &str) -> Option<NaiveDate> {
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    None
}

/// Rewrites localized month/weekday names so the English format tables
/// apply. chrono matches names case-insensitively, so lowercasing first
/// keeps the table small.
fn translate(text: &str, locale: DateLocale) -> String {
    let mut out = text.to_lowercase();
    let (months, weekdays) = match locale {
        DateLocale::Dutch => (DUTCH_MONTHS, DUTCH_WEEKDAYS),
    };
    for (from, to) in weekdays.iter().chain(months) {
        out = out.replace(from, to);
    }
    out
}
