use journal_core::EntryFilter;

use crate::commands::common::{entry_to_list_item, format_entry_lines, EntryListItem};
use crate::error::CliError;
use crate::shell::Session;

pub const EMPTY_STATE: &str = "No journal entries yet.";
pub const NO_MATCHES: &str = "No entries match the current filter.";

pub fn run_list(
    session: &Session,
    bookmarked: bool,
    search: Option<String>,
    as_json: bool,
) -> Result<String, CliError> {
    if bookmarked || search.is_some() {
        let filter = EntryFilter {
            bookmarked_only: bookmarked,
            search_text: search.unwrap_or_default(),
        };
        render_list(session, &filter, as_json)
    } else {
        render_list(session, &session.filter, as_json)
    }
}

pub fn render_list(
    session: &Session,
    filter: &EntryFilter,
    as_json: bool,
) -> Result<String, CliError> {
    let entries = session.store.list(filter);

    if as_json {
        let now = chrono::Local::now().naive_local();
        let json_items = entries
            .iter()
            .map(|entry| entry_to_list_item(entry, session.store.date_format(), now))
            .collect::<Vec<EntryListItem>>();
        return Ok(serde_json::to_string_pretty(&json_items)?);
    }

    if session.store.is_empty() {
        return Ok(EMPTY_STATE.to_string());
    }
    if entries.is_empty() {
        return Ok(NO_MATCHES.to_string());
    }
    Ok(format_entry_lines(&entries).join("\n"))
}
