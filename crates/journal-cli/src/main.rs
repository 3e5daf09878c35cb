//! Journal CLI - an interactive diary shell
//!
//! Entries live in memory for the length of the session.

mod cli;
mod commands;
mod error;
mod shell;


use clap::Parser;
use journal_core::config::JournalConfig;
use journal_core::models::is_valid_date_format;
use journal_core::EntryStore;

use crate::cli::Cli;
use crate::error::CliError;
use crate::shell::{run_shell, Session};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("journal=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    tracing::debug!(date_format = %config.date_format, default_sort = %config.default_sort, "Starting journal shell");

    let session = Session::new(EntryStore::with_config(&config), config.default_sort, cli.live);
    run_shell(session).await
}

fn resolve_config(cli: &Cli) -> Result<JournalConfig, CliError> {
    let mut config = JournalConfig::load(cli.config.as_deref())?;
    if let Some(date_format) = &cli.date_format {
        if !is_valid_date_format(date_format) {
            return Err(CliError::InvalidDateFormat(date_format.clone()));
        }
        config.date_format.clone_from(date_format);
    }
    Ok(config)
}
