//! Journal entry model

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to entries created with an empty title
pub const UNTITLED: &str = "Untitled";

/// Abbreviated date with short time, e.g. `Oct 26, 2025 at 3:45 PM`
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

/// A unique identifier for a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random entry ID. Only the store mints ids.
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A diary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier
    pub id: EntryId,
    /// Title, "Untitled" when created blank
    pub title: String,
    /// Body text
    pub content: String,
    /// Creation time as display text
    pub date: String,
    /// Bookmark flag
    pub is_bookmarked: bool,
}

impl JournalEntry {
    pub(crate) fn new(title: &str, content: &str, date: String) -> Self {
        Self {
            id: EntryId::new(),
            title: normalize_title(title),
            content: content.to_string(),
            date,
            is_bookmarked: false,
        }
    }

    /// Parse the display date back into a timestamp using `format`.
    #[must_use]
    pub fn parsed_date(&self, format: &str) -> Option<NaiveDateTime> {
        parse_entry_date(&self.date, format)
    }

    /// Case-insensitive substring match on title or content.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Only the zero-length title is replaced; whitespace titles are kept.
fn normalize_title(title: &str) -> String {
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title.to_string()
    }
}

/// Whether `format` renders a timestamp that parses back with the same format.
///
/// Rejects unknown specifiers and zone specifiers such as `%z`, which a naive
/// timestamp cannot render, and patterns too coarse to sort by.
#[must_use]
pub fn is_valid_date_format(format: &str) -> bool {
    NaiveDate::from_ymd_opt(2001, 2, 3)
        .and_then(|day| day.and_hms_opt(16, 5, 0))
        .and_then(|sample| render_date(sample, format))
        .is_some_and(|rendered| parse_entry_date(&rendered, format).is_some())
}

/// Render `timestamp` with `format`, falling back to the default format.
#[must_use]
pub fn format_entry_date(timestamp: NaiveDateTime, format: &str) -> String {
    if is_valid_date_format(format) {
        if let Some(rendered) = render_date(timestamp, format) {
            return rendered;
        }
    }
    timestamp.format(DEFAULT_DATE_FORMAT).to_string()
}

fn render_date(timestamp: NaiveDateTime, format: &str) -> Option<String> {
    let mut rendered = String::new();
    write!(rendered, "{}", timestamp.format(format)).ok()?;
    Some(rendered)
}

/// Parse a display date. Date-only formats resolve to midnight.
#[must_use]
pub fn parse_entry_date(date: &str, format: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(date, format)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(date, format)
                .ok()
                .and_then(|day| day.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_entry_id_unique() {
        let id1 = EntryId::new();
        let id2 = EntryId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_entry_id_parse() {
        let id = EntryId::new();
        let parsed: EntryId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_empty_title_becomes_untitled() {
        let entry = JournalEntry::new("", "", "Oct 26, 2025 at 3:45 PM".to_string());
        assert_eq!(entry.title, UNTITLED);
        assert!(!entry.is_bookmarked);
    }

    #[test]
    fn test_whitespace_title_is_kept() {
        let entry = JournalEntry::new("   ", "body", String::new());
        assert_eq!(entry.title, "   ");
    }

    #[test]
    fn test_default_format_matches_display_style() {
        assert_eq!(
            format_entry_date(at(2025, 10, 26, 15, 45), DEFAULT_DATE_FORMAT),
            "Oct 26, 2025 at 3:45 PM"
        );
        assert_eq!(
            format_entry_date(at(2025, 3, 4, 9, 5), DEFAULT_DATE_FORMAT),
            "Mar 4, 2025 at 9:05 AM"
        );
    }

    #[test]
    fn test_default_format_parses_back() {
        let timestamp = at(2025, 10, 26, 15, 45);
        let rendered = format_entry_date(timestamp, DEFAULT_DATE_FORMAT);
        assert_eq!(
            parse_entry_date(&rendered, DEFAULT_DATE_FORMAT),
            Some(timestamp)
        );
    }

    #[test]
    fn test_date_only_format_parses_to_midnight() {
        assert_eq!(
            parse_entry_date("2025-10-26", "%Y-%m-%d"),
            Some(at(2025, 10, 26, 0, 0))
        );
    }

    #[test]
    fn test_unparseable_date() {
        assert_eq!(parse_entry_date("yesterday-ish", DEFAULT_DATE_FORMAT), None);
    }

    #[test]
    fn test_invalid_format_falls_back_to_default() {
        assert!(!is_valid_date_format("%Q broken"));
        assert!(!is_valid_date_format("  "));
        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
        assert_eq!(
            format_entry_date(at(2025, 10, 26, 15, 45), "%Q broken"),
            "Oct 26, 2025 at 3:45 PM"
        );
    }

    #[test]
    fn test_zone_and_time_only_formats_are_rejected() {
        assert!(!is_valid_date_format("%Y-%m-%d %H:%M %z"));
        assert!(!is_valid_date_format("%Y-%m-%d %H:%M %Z"));
        assert!(!is_valid_date_format("%H:%M"));
        assert_eq!(
            format_entry_date(at(2025, 10, 26, 9, 0), "%Y-%m-%d %H:%M %z"),
            "Oct 26, 2025 at 9:00 AM"
        );
    }

    #[test]
    fn test_mentions_is_case_insensitive() {
        let entry = JournalEntry::new("Trip to Paris", "Saw the tower", String::new());
        assert!(entry.mentions("paris"));
        assert!(entry.mentions("tower"));
        assert!(!entry.mentions("london"));
    }
}
