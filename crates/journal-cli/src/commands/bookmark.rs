use crate::commands::common::resolve_entry_id;
use crate::error::CliError;
use crate::shell::Session;

pub fn run_bookmark(session: &mut Session, id: &str) -> Result<String, CliError> {
    let entry_id = resolve_entry_id(session, id)?;
    let is_bookmarked = session.store.toggle_bookmark(&entry_id)?;

    let state = if is_bookmarked {
        "bookmarked"
    } else {
        "unbookmarked"
    };
    Ok(format!("{entry_id} {state}"))
}
