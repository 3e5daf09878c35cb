//! Interactive session: one store, one active filter, one dictation controller.

use std::io::IsTerminal;

use clap::error::ErrorKind;
use clap::Parser;
use journal_core::dictation::Dictation;
use journal_core::events::StoreSubscription;
use journal_core::{EntryFilter, EntryStore, SortOrder};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;

use crate::cli::{ShellCommand, ShellLine};
use crate::commands::{
    add::run_add, bookmark::run_bookmark, delete::run_delete, dictate::run_dictate,
    edit::run_edit, filter::run_filter, list::render_list, list::run_list, show::run_show,
    sort::run_sort,
};
use crate::error::CliError;

const PROMPT: &str = "journal> ";

/// Result of one shell line
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print (may be empty)
    Output(String),
    /// Leave the shell
    Quit,
}

pub struct Session {
    pub(crate) store: EntryStore,
    pub(crate) filter: EntryFilter,
    pub(crate) default_sort: SortOrder,
    pub(crate) dictation: Dictation,
    pub(crate) speech: Option<UnboundedSender<String>>,
    pub(crate) transcript: watch::Receiver<String>,
    events: StoreSubscription,
    live: bool,
}

impl Session {
    pub fn new(mut store: EntryStore, default_sort: SortOrder, live: bool) -> Self {
        let events = store.subscribe();
        let dictation = Dictation::new();
        let transcript = dictation.watch();
        Self {
            store,
            filter: EntryFilter::default(),
            default_sort,
            dictation,
            speech: None,
            transcript,
            events,
            live,
        }
    }

    /// Parse and run one line of input.
    pub async fn execute(&mut self, line: &str) -> Result<Outcome, CliError> {
        let Some(args) = shlex::split(line) else {
            return Err(CliError::UnbalancedQuotes);
        };
        if args.is_empty() {
            return Ok(Outcome::Output(String::new()));
        }

        let command = match ShellLine::try_parse_from(args) {
            Ok(parsed) => parsed.command,
            Err(error) => {
                return match error.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        Ok(Outcome::Output(error.render().to_string()))
                    }
                    _ => Err(CliError::Usage(
                        error
                            .render()
                            .to_string()
                            .trim_start_matches("error: ")
                            .to_string(),
                    )),
                };
            }
        };

        let mut output = self.dispatch(command).await?;
        let Some(text) = output.as_mut() else {
            return Ok(Outcome::Quit);
        };

        let search_changed = self.apply_transcript();
        let store_changed = self.drain_changes() > 0;
        if self.live && (store_changed || search_changed) {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&render_list(self, &self.filter, false)?);
        }

        Ok(Outcome::Output(output.unwrap_or_default()))
    }

    async fn dispatch(&mut self, command: ShellCommand) -> Result<Option<String>, CliError> {
        let output = match command {
            ShellCommand::Add { title, content } => run_add(self, &title, &content)?,
            ShellCommand::Show { id } => run_show(self, &id)?,
            ShellCommand::Edit { id, title, content } => {
                run_edit(self, &id, title.as_deref(), content.as_deref())?
            }
            ShellCommand::Bookmark { id } => run_bookmark(self, &id)?,
            ShellCommand::Delete { id } => run_delete(self, &id)?,
            ShellCommand::List {
                bookmarked,
                search,
                json,
            } => run_list(self, bookmarked, search, json)?,
            ShellCommand::Filter {
                bookmarked,
                search,
                clear,
            } => run_filter(self, bookmarked, search, clear),
            ShellCommand::Sort { order } => run_sort(self, order.map(SortOrder::from)),
            ShellCommand::Dictate { command } => run_dictate(self, command).await?,
            ShellCommand::Quit => return Ok(None),
        };
        Ok(Some(output))
    }

    /// Copy a newly dictated transcript into the search text (last value wins).
    pub(crate) fn apply_transcript(&mut self) -> bool {
        if !self.transcript.has_changed().unwrap_or(false) {
            return false;
        }
        let text = self.transcript.borrow_and_update().clone();
        if text == self.filter.search_text {
            return false;
        }
        tracing::debug!(search = %text, "Applied dictated search text");
        self.filter.search_text = text;
        true
    }

    fn drain_changes(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.events.try_recv() {
            tracing::debug!(?event, "Store changed");
            count += 1;
        }
        count
    }
}

/// Read commands from stdin until EOF or `quit`.
pub async fn run_shell(mut session: Session) -> Result<(), CliError> {
    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    if interactive {
        stdout
            .write_all(b"Journal shell. Type `help` for commands.\n")
            .await?;
    }

    loop {
        if interactive {
            stdout.write_all(PROMPT.as_bytes()).await?;
            stdout.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match session.execute(&line).await {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Output(text)) => {
                if !text.is_empty() {
                    stdout.write_all(text.trim_end().as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
            }
            Err(error) => {
                let message = error.to_string();
                stdout
                    .write_all(format!("Error: {}\n", message.trim_end()).as_bytes())
                    .await?;
            }
        }
        stdout.flush().await?;
    }

    session.dictation.stop();
    Ok(())
}
