use chrono::NaiveDateTime;
use journal_core::{EntryId, JournalEntry};
use serde::Serialize;

use crate::error::CliError;
use crate::shell::Session;

const SHORT_ID_CHARS: usize = 8;
const PREVIEW_CHARS: usize = 60;
const ELLIPSIS: &str = "...";

#[derive(Debug, Serialize)]
pub struct EntryListItem {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub content: String,
    pub date: String,
    pub relative_time: Option<String>,
    pub is_bookmarked: bool,
}

pub fn entry_to_list_item(
    entry: &JournalEntry,
    date_format: &str,
    now: NaiveDateTime,
) -> EntryListItem {
    EntryListItem {
        id: entry.id.to_string(),
        title: entry.title.clone(),
        preview: entry_preview(entry, PREVIEW_CHARS),
        content: entry.content.clone(),
        date: entry.date.clone(),
        relative_time: entry
            .parsed_date(date_format)
            .map(|created| format_relative_time(created, now)),
        is_bookmarked: entry.is_bookmarked,
    }
}

pub fn format_entry_lines(entries: &[&JournalEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let preview = entry_preview(entry, PREVIEW_CHARS);
            let mut line = format!(
                "{}  {} {}  {}",
                short_id(&entry.id),
                bookmark_marker(entry.is_bookmarked),
                entry.date,
                entry.title
            );
            if !preview.is_empty() {
                line.push_str("  | ");
                line.push_str(&preview);
            }
            line
        })
        .collect()
}

pub fn short_id(id: &EntryId) -> String {
    id.as_str().chars().take(SHORT_ID_CHARS).collect()
}

pub const fn bookmark_marker(is_bookmarked: bool) -> char {
    if is_bookmarked {
        '*'
    } else {
        ' '
    }
}

/// First content line with whitespace collapsed, cut to `max_chars`.
pub fn entry_preview(entry: &JournalEntry, max_chars: usize) -> String {
    let first_line = entry.content.lines().next().unwrap_or_default();
    let mut preview = String::new();
    for word in first_line.split_whitespace() {
        if !preview.is_empty() {
            preview.push(' ');
        }
        preview.push_str(word);
    }

    if preview.chars().count() > max_chars {
        let keep = max_chars.saturating_sub(ELLIPSIS.len());
        if let Some((end, _)) = preview.char_indices().nth(keep) {
            preview.truncate(end);
        }
        preview.push_str(ELLIPSIS);
    }
    preview
}

/// Largest unit first, sizes in minutes
const AGE_UNITS: [(i64, &str); 5] = [
    (365 * 24 * 60, "y"),
    (30 * 24 * 60, "mo"),
    (7 * 24 * 60, "w"),
    (24 * 60, "d"),
    (60, "h"),
];

pub fn format_relative_time(created: NaiveDateTime, now: NaiveDateTime) -> String {
    let minutes = (now - created).num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    AGE_UNITS
        .iter()
        .find(|(size, _)| minutes >= *size)
        .map_or_else(
            || format!("{minutes}m ago"),
            |(size, unit)| format!("{}{unit} ago", minutes / size),
        )
}

pub fn resolve_entry_id(session: &Session, query: &str) -> Result<EntryId, CliError> {
    Ok(session.store.resolve(query)?.id)
}
