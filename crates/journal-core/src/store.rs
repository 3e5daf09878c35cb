//! In-memory entry store
//!
//! [`EntryStore`] owns the ordered sequence of journal entries and is the only
//! place they are created, edited, bookmarked, reordered, or removed. Readers
//! get shared references; change notifications go out through
//! [`EntryStore::subscribe`].

use std::fmt;

use chrono::NaiveDateTime;

use crate::clock::{Clock, SystemClock};
use crate::config::JournalConfig;
use crate::error::{Error, Result};
use crate::events::{StoreEvent, StoreSubscription, Subscribers};
use crate::filter::EntryFilter;
use crate::models::{
    format_entry_date, is_valid_date_format, EntryId, JournalEntry, SortOrder, DEFAULT_DATE_FORMAT,
};

/// Number of characters shown per candidate in an ambiguous-prefix error
const AMBIGUOUS_ID_PREVIEW_CHARS: usize = 8;

/// The authoritative list of journal entries
pub struct EntryStore {
    entries: Vec<JournalEntry>,
    date_format: String,
    clock: Box<dyn Clock>,
    subscribers: Subscribers,
}

impl EntryStore {
    /// Create an empty store using the default date format and system clock
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            clock: Box::new(SystemClock),
            subscribers: Subscribers::default(),
        }
    }

    /// Create an empty store using the configured date format
    #[must_use]
    pub fn with_config(config: &JournalConfig) -> Self {
        Self::new().with_date_format(config.date_format.clone())
    }

    /// Replace the clock used to stamp new entries
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the format used to render and parse entry dates.
    ///
    /// A format that cannot round-trip a timestamp keeps the current one.
    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        let date_format = date_format.into();
        if is_valid_date_format(&date_format) {
            self.date_format = date_format;
        } else {
            tracing::warn!(%date_format, "Ignoring unusable date format");
        }
        self
    }

    /// Format used for entry dates
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Register for change notifications
    pub fn subscribe(&mut self) -> StoreSubscription {
        self.subscribers.subscribe()
    }

    /// Create an entry and append it to the end of the sequence
    pub fn add(&mut self, title: &str, content: &str) -> EntryId {
        let date = format_entry_date(self.clock.now(), &self.date_format);
        let entry = JournalEntry::new(title, content, date);
        let id = entry.id;

        tracing::debug!(%id, title = %entry.title, "Added journal entry");
        self.entries.push(entry);
        self.subscribers.notify(StoreEvent::Added(id));
        id
    }

    /// Replace an entry's title and content in place
    pub fn edit(&mut self, id: &EntryId, title: &str, content: &str) -> Result<()> {
        let entry = self.entry_mut(id)?;
        title.clone_into(&mut entry.title);
        content.clone_into(&mut entry.content);

        tracing::debug!(%id, "Edited journal entry");
        self.subscribers.notify(StoreEvent::Edited(*id));
        Ok(())
    }

    /// Flip an entry's bookmark flag, returning the new value
    pub fn toggle_bookmark(&mut self, id: &EntryId) -> Result<bool> {
        let entry = self.entry_mut(id)?;
        entry.is_bookmarked = !entry.is_bookmarked;
        let is_bookmarked = entry.is_bookmarked;

        tracing::debug!(%id, is_bookmarked, "Toggled bookmark");
        self.subscribers.notify(StoreEvent::BookmarkToggled {
            id: *id,
            is_bookmarked,
        });
        Ok(is_bookmarked)
    }

    /// Remove an entry, returning it
    pub fn delete(&mut self, id: &EntryId) -> Result<JournalEntry> {
        let index = self.position(id)?;
        let removed = self.entries.remove(index);

        tracing::debug!(%id, "Deleted journal entry");
        self.subscribers.notify(StoreEvent::Deleted(*id));
        Ok(removed)
    }

    /// Entries passing `filter`, in sequence order
    #[must_use]
    pub fn list(&self, filter: &EntryFilter) -> Vec<&JournalEntry> {
        filter.apply(&self.entries)
    }

    /// Reorder the sequence by creation date.
    ///
    /// Entries whose date does not parse with the store's format stay where
    /// they are; the rest are sorted into the remaining positions.
    pub fn sort(&mut self, order: SortOrder) {
        let mut slots = Vec::new();
        let mut dated: Vec<(NaiveDateTime, usize)> = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if let Some(timestamp) = entry.parsed_date(&self.date_format) {
                slots.push(index);
                dated.push((timestamp, index));
            }
        }

        match order {
            SortOrder::OldestFirst => dated.sort_by(|left, right| left.0.cmp(&right.0)),
            SortOrder::NewestFirst => dated.sort_by(|left, right| right.0.cmp(&left.0)),
        }

        let mut taken: Vec<Option<JournalEntry>> =
            std::mem::take(&mut self.entries).into_iter().map(Some).collect();
        let sorted: Vec<JournalEntry> = dated
            .iter()
            .filter_map(|(_, index)| taken[*index].take())
            .collect();
        for (slot, entry) in slots.into_iter().zip(sorted) {
            taken[slot] = Some(entry);
        }
        self.entries = taken.into_iter().flatten().collect();

        tracing::debug!(%order, pinned = self.entries.len() - dated.len(), "Sorted journal entries");
        self.subscribers.notify(StoreEvent::Sorted(order));
    }

    /// All entries in sequence order
    #[must_use]
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Look up an entry by id
    #[must_use]
    pub fn get(&self, id: &EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by full id or unique id prefix
    pub fn resolve(&self, query: &str) -> Result<&JournalEntry> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidId("entry id cannot be empty".to_string()));
        }

        if let Ok(id) = query.parse::<EntryId>() {
            return self.get(&id).ok_or(Error::NotFound(id));
        }

        let prefix = query.to_ascii_lowercase();
        let matches: Vec<&JournalEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.id.as_str().starts_with(&prefix))
            .collect();

        match matches.as_slice() {
            [] => Err(Error::UnknownId(query.to_string())),
            [entry] => Ok(entry),
            candidates => {
                let options = candidates
                    .iter()
                    .take(3)
                    .map(|entry| {
                        entry
                            .id
                            .as_str()
                            .chars()
                            .take(AMBIGUOUS_ID_PREVIEW_CHARS.max(prefix.len() + 1))
                            .collect::<String>()
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                Err(Error::AmbiguousId(format!(
                    "ID prefix '{query}' is ambiguous; matches: {options}"
                )))
            }
        }
    }

    fn position(&self, id: &EntryId) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == *id)
            .ok_or_else(|| {
                tracing::debug!(%id, "No journal entry with this id");
                Error::NotFound(*id)
            })
    }

    fn entry_mut(&mut self, id: &EntryId) -> Result<&mut JournalEntry> {
        let index = self.position(id)?;
        Ok(&mut self.entries[index])
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryStore")
            .field("entries", &self.entries)
            .field("date_format", &self.date_format)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
