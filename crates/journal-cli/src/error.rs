use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] journal_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
    #[error("Unbalanced quotes in command")]
    UnbalancedQuotes,
    #[error("Nothing to change; pass --title and/or --content")]
    NothingToEdit,
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),
    #[error("Dictation is not running; use `dictate start` first")]
    DictationIdle,
    #[error("Dictated text cannot be empty")]
    EmptyDictation,
    #[error("Speech source stopped before the transcript arrived")]
    SpeechSourceClosed,
}
