use journal_core::draft::EntryDraft;

use crate::error::CliError;
use crate::shell::Session;

pub fn run_edit(
    session: &mut Session,
    id: &str,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<String, CliError> {
    if title.is_none() && content.is_none() {
        return Err(CliError::NothingToEdit);
    }

    let mut draft = EntryDraft::from_entry(session.store.resolve(id)?);
    if let Some(title) = title {
        title.clone_into(&mut draft.title);
    }
    if let Some(content) = content {
        content.clone_into(&mut draft.content);
    }

    if !draft.is_dirty() {
        let unchanged = draft.editing().map(|id| id.to_string()).unwrap_or_default();
        return Ok(format!("{unchanged} (unchanged)"));
    }

    let updated = draft.commit(&mut session.store)?;
    Ok(updated.to_string())
}
