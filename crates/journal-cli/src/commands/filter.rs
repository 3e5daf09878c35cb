use journal_core::EntryFilter;

use crate::shell::Session;

pub fn run_filter(
    session: &mut Session,
    bookmarked: bool,
    search: Option<String>,
    clear: bool,
) -> String {
    session.filter = if clear {
        EntryFilter::all()
    } else {
        EntryFilter {
            bookmarked_only: bookmarked,
            search_text: search.unwrap_or_default(),
        }
    };
    describe_filter(&session.filter)
}

pub fn describe_filter(filter: &EntryFilter) -> String {
    if filter.is_empty() {
        return "Filter: all entries".to_string();
    }

    let mut parts = Vec::new();
    if filter.bookmarked_only {
        parts.push("bookmarked only".to_string());
    }
    if !filter.search_text.is_empty() {
        parts.push(format!("search {:?}", filter.search_text));
    }
    format!("Filter: {}", parts.join(", "))
}
