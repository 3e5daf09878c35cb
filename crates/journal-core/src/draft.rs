//! Unsaved title/content of a create or edit sheet.

use crate::error::Result;
use crate::models::{EntryId, JournalEntry};
use crate::store::EntryStore;

/// Buffer a front end edits before committing to the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    original: Option<Original>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Original {
    id: EntryId,
    title: String,
    content: String,
}

impl EntryDraft {
    /// Blank draft for a new entry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft prefilled from an existing entry
    #[must_use]
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            title: entry.title.clone(),
            content: entry.content.clone(),
            original: Some(Original {
                id: entry.id,
                title: entry.title.clone(),
                content: entry.content.clone(),
            }),
        }
    }

    /// Entry this draft edits, if any
    #[must_use]
    pub fn editing(&self) -> Option<EntryId> {
        self.original.as_ref().map(|original| original.id)
    }

    /// Whether closing the sheet would lose typed text
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match &self.original {
            None => !self.title.is_empty() || !self.content.is_empty(),
            Some(original) => self.title != original.title || self.content != original.content,
        }
    }

    /// Save: add a new entry or edit the original one.
    pub fn commit(&self, store: &mut EntryStore) -> Result<EntryId> {
        match &self.original {
            None => Ok(store.add(&self.title, &self.content)),
            Some(original) => {
                store.edit(&original.id, &self.title, &self.content)?;
                Ok(original.id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNTITLED;

    #[test]
    fn blank_draft_is_clean() {
        assert!(!EntryDraft::new().is_dirty());
    }

    #[test]
    fn new_draft_with_text_is_dirty() {
        let mut draft = EntryDraft::new();
        draft.content.push_str("dear diary");
        assert!(draft.is_dirty());
    }

    #[test]
    fn edit_draft_is_dirty_only_after_changes() {
        let mut store = EntryStore::new();
        let id = store.add("Title", "Body");
        let mut draft = EntryDraft::from_entry(store.get(&id).unwrap());

        assert_eq!(draft.editing(), Some(id));
        assert!(!draft.is_dirty());

        draft.title.push('!');
        assert!(draft.is_dirty());
        draft.title.pop();
        assert!(!draft.is_dirty());
    }

    #[test]
    fn commit_new_adds_entry() {
        let mut store = EntryStore::new();
        let id = EntryDraft::new().commit(&mut store).unwrap();
        assert_eq!(store.get(&id).unwrap().title, UNTITLED);
    }

    #[test]
    fn commit_edit_updates_original() {
        let mut store = EntryStore::new();
        let id = store.add("Title", "Body");
        let mut draft = EntryDraft::from_entry(store.get(&id).unwrap());
        draft.content = "New body".to_string();

        assert_eq!(draft.commit(&mut store).unwrap(), id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().content, "New body");
    }

    #[test]
    fn commit_edit_of_deleted_entry_is_not_found() {
        let mut store = EntryStore::new();
        let id = store.add("Title", "Body");
        let draft = EntryDraft::from_entry(store.get(&id).unwrap());
        store.delete(&id).unwrap();

        assert!(draft.commit(&mut store).unwrap_err().is_not_found());
        assert!(store.is_empty());
    }
}
