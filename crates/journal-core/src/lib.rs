//! journal-core - Core library for Journal
//!
//! This crate contains the entry model, the in-memory entry store, filtering,
//! drafts, and the dictation state machine used by every Journal front end.

pub mod clock;
pub mod config;
pub mod dictation;
pub mod draft;
pub mod error;
pub mod events;
pub mod filter;
pub mod models;
pub mod store;

pub use error::{Error, Result};
pub use filter::EntryFilter;
pub use models::{EntryId, JournalEntry, SortOrder};
pub use store::EntryStore;
