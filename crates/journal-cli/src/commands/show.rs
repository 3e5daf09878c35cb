use crate::error::CliError;
use crate::shell::Session;

pub fn run_show(session: &Session, id: &str) -> Result<String, CliError> {
    let entry = session.store.resolve(id)?;

    let mut lines = vec![
        format!("id:         {}", entry.id),
        format!("title:      {}", entry.title),
        format!("date:       {}", entry.date),
        format!(
            "bookmarked: {}",
            if entry.is_bookmarked { "yes" } else { "no" }
        ),
    ];
    if !entry.content.is_empty() {
        lines.push(String::new());
        lines.push(entry.content.clone());
    }
    Ok(lines.join("\n"))
}
