//! Carrel CLI Application
//!
//! Command-line interface for the carrel study tracking tool.

mod args;
mod cli;

use anyhow::{Context, Result};
use args::{Args, Commands};
use carrel_core::TrackerBuilder;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, command } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Carrel started");

    let cli = Cli::new(tracker);

    match command {
        Some(Commands::Class { command }) => cli.handle_class_command(command).await,
        Some(Commands::Doc { command }) => cli.handle_doc_command(command).await,
        None => cli.list_classes(false).await,
    }
}
