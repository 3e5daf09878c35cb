use crate::commands::common::resolve_entry_id;
use crate::error::CliError;
use crate::shell::Session;

pub fn run_delete(session: &mut Session, id: &str) -> Result<String, CliError> {
    let entry_id = resolve_entry_id(session, id)?;
    let removed = session.store.delete(&entry_id)?;
    Ok(removed.id.to_string())
}
