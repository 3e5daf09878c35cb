//! Data models for Journal

mod entry;
mod sort_order;

pub use entry::{
    format_entry_date, is_valid_date_format, parse_entry_date, EntryId, JournalEntry,
    DEFAULT_DATE_FORMAT, UNTITLED,
};
pub use sort_order::SortOrder;
