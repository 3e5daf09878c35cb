use journal_core::draft::EntryDraft;

use crate::error::CliError;
use crate::shell::Session;

pub fn run_add(
    session: &mut Session,
    title: &str,
    content_parts: &[String],
) -> Result<String, CliError> {
    let mut draft = EntryDraft::new();
    title.clone_into(&mut draft.title);
    draft.content = content_parts.join(" ");

    let id = draft.commit(&mut session.store)?;
    Ok(id.to_string())
}
