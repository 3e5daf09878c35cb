//! Entry list filtering (bookmark flag + text search).

use serde::{Deserialize, Serialize};

use crate::models::JournalEntry;

/// Which entries a list view shows.
///
/// Filters are total: every combination of flag and text is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Only show bookmarked entries
    #[serde(default)]
    pub bookmarked_only: bool,
    /// Case-insensitive substring matched against title and content
    #[serde(default)]
    pub search_text: String,
}

impl EntryFilter {
    /// Filter that passes every entry.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter that passes bookmarked entries only.
    #[must_use]
    pub fn bookmarked() -> Self {
        Self {
            bookmarked_only: true,
            search_text: String::new(),
        }
    }

    /// Filter on search text.
    #[must_use]
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            bookmarked_only: false,
            search_text: text.into(),
        }
    }

    /// Same filter with `bookmarked_only` set.
    #[must_use]
    pub const fn with_bookmarked_only(mut self, bookmarked_only: bool) -> Self {
        self.bookmarked_only = bookmarked_only;
        self
    }

    /// Whether the filter passes everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.bookmarked_only && self.search_text.is_empty()
    }

    /// Whether `entry` passes this filter.
    #[must_use]
    pub fn matches(&self, entry: &JournalEntry) -> bool {
        self.matcher().matches(entry)
    }

    /// Select the passing entries, keeping their order.
    pub fn apply<'a, I>(&self, entries: I) -> Vec<&'a JournalEntry>
    where
        I: IntoIterator<Item = &'a JournalEntry>,
    {
        let matcher = self.matcher();
        entries
            .into_iter()
            .filter(|entry| matcher.matches(entry))
            .collect()
    }

    fn matcher(&self) -> Matcher {
        Matcher {
            bookmarked_only: self.bookmarked_only,
            query: normalize_query(&self.search_text),
        }
    }
}

/// Filter with the query lowercased once per listing.
struct Matcher {
    bookmarked_only: bool,
    query: String,
}

impl Matcher {
    fn matches(&self, entry: &JournalEntry) -> bool {
        entry_matches_bookmark(entry, self.bookmarked_only)
            && entry_matches_query(entry, &self.query)
    }
}

/// Only the zero-length query is empty; whitespace is matched literally.
fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

const fn entry_matches_bookmark(entry: &JournalEntry, bookmarked_only: bool) -> bool {
    !bookmarked_only || entry.is_bookmarked
}

fn entry_matches_query(entry: &JournalEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    entry.mentions(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, content: &str, is_bookmarked: bool) -> JournalEntry {
        let mut entry = JournalEntry::new(title, content, String::new());
        entry.is_bookmarked = is_bookmarked;
        entry
    }

    #[test]
    fn empty_filter_passes_everything() {
        let entries = vec![entry("a", "", false), entry("b", "", true)];
        let filtered = EntryFilter::all().apply(&entries);
        assert_eq!(filtered.len(), 2);
        assert!(EntryFilter::all().is_empty());
    }

    #[test]
    fn bookmarked_only_keeps_bookmarked_entries_in_order() {
        let entries = vec![
            entry("first", "", true),
            entry("second", "", false),
            entry("third", "", true),
        ];

        let titles: Vec<&str> = EntryFilter::bookmarked()
            .apply(&entries)
            .into_iter()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(titles, vec!["first", "third"]);
    }

    #[test]
    fn search_matches_title_or_content_case_insensitively() {
        let entries = vec![
            entry("Trip to Paris", "croissants", false),
            entry("Work", "Meeting about PARIS office", false),
            entry("Garden", "tomatoes", false),
        ];

        assert_eq!(EntryFilter::search("paris").apply(&entries).len(), 2);
        assert_eq!(EntryFilter::search("PARIS").apply(&entries).len(), 2);
        assert!(EntryFilter::search("london").apply(&entries).is_empty());
    }

    #[test]
    fn search_and_bookmark_combine() {
        let entries = vec![
            entry("Paris day one", "", true),
            entry("Paris day two", "", false),
        ];

        let filtered = EntryFilter::search("paris")
            .with_bookmarked_only(true)
            .apply(&entries);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Paris day one");
    }

    #[test]
    fn whitespace_in_query_is_matched_literally() {
        let entries = vec![entry("a", "", false), entry("Trip to Paris", "", false)];

        let spaced: Vec<&str> = EntryFilter::search(" ")
            .apply(&entries)
            .into_iter()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(spaced, vec!["Trip to Paris"]);
        assert!(!EntryFilter::search(" ").is_empty());

        assert!(EntryFilter::search("paris ").apply(&entries).is_empty());
        assert_eq!(EntryFilter::search("to paris").apply(&entries).len(), 1);
    }
}
