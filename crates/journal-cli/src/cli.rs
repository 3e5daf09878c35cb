use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use journal_core::SortOrder;

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Keep a diary from the terminal for the length of a session")]
#[command(version)]
pub struct Cli {
    /// Optional path to a JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the entry date format (strftime pattern)
    #[arg(long, value_name = "FORMAT")]
    pub date_format: Option<String>,

    /// Print the list again after every change
    #[arg(long)]
    pub live: bool,
}

/// One line typed into the shell
#[derive(Parser)]
#[command(name = "journal", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand)]
pub enum ShellCommand {
    /// Create a new entry
    #[command(alias = "new")]
    Add {
        /// Entry title ("Untitled" when omitted)
        #[arg(short, long, default_value = "")]
        title: String,
        /// Entry text
        content: Vec<String>,
    },
    /// Show one entry in full
    Show {
        /// Entry ID or unique ID prefix
        id: String,
    },
    /// Replace an entry's title and/or content
    Edit {
        /// Entry ID or unique ID prefix
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Toggle an entry's bookmark
    Bookmark {
        /// Entry ID or unique ID prefix
        id: String,
    },
    /// Delete an entry
    #[command(alias = "rm")]
    Delete {
        /// Entry ID or unique ID prefix
        id: String,
    },
    /// List entries (uses the active filter unless flags are given)
    #[command(alias = "ls")]
    List {
        /// Only bookmarked entries
        #[arg(short, long)]
        bookmarked: bool,
        /// Case-insensitive text to look for in titles and content
        #[arg(short, long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set or clear the active filter
    Filter {
        /// Only bookmarked entries
        #[arg(short, long)]
        bookmarked: bool,
        /// Case-insensitive search text
        #[arg(short, long)]
        search: Option<String>,
        /// Reset to showing everything
        #[arg(long, conflicts_with_all = ["bookmarked", "search"])]
        clear: bool,
    },
    /// Sort entries by date (configured default when omitted)
    Sort {
        #[arg(value_enum)]
        order: Option<SortArg>,
    },
    /// Dictate the search text
    Dictate {
        #[command(subcommand)]
        command: DictateCommand,
    },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand)]
pub enum DictateCommand {
    /// Start a dictation session
    Start,
    /// Stop the running session
    Stop,
    /// Feed spoken words to the running session
    Say {
        /// Words heard by the recognizer
        words: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortArg {
    Newest,
    Oldest,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Newest => Self::NewestFirst,
            SortArg::Oldest => Self::OldestFirst,
        }
    }
}
