// docfinder - doctor directory browser for the terminal
//
// Loads a doctor directory once and lets the user search, filter and sort
// it. The whole view (search term, filters, sort) lives in one query
// string, so any view can be shared and restored with `--view`.
//
// Architecture:
// - Source: one background fetch of the directory (reqwest or a local file)
// - Directory: pure model, filtering, sorting and the query-string codec
// - TUI (ratatui): search bar, filter panel and doctor list
// - Snapshot: headless JSON rendering of the same view

mod cli;
mod config;
mod directory;
mod logging;
mod snapshot;
mod source;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use logging::LogBuffer;
use source::SourceState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle CLI commands first (config --show, --path, --reset)
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // env > file > defaults, then flags on top
    let mut config = Config::from_env();
    cli.apply(&mut config);

    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, config.enable_tui, &log_buffer);

    tracing::info!(
        source = %config.source_url,
        view = %config.initial_view,
        "docfinder {} starting",
        config::VERSION
    );

    if config.enable_tui {
        tui::run_tui(config, log_buffer).await?;
    } else {
        run_headless(&config).await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Load the directory, apply the initial view and print the snapshot
async fn run_headless(config: &Config) -> Result<()> {
    let state = SourceState::from_result(source::fetch_doctors(config).await);
    if let Some(e) = state.failure() {
        tracing::error!("Failed to load doctor directory: {}", e);
    }

    let mut app = tui::app::App::new(config, LogBuffer::new());
    app.set_source(state);

    let json = app
        .snapshot()
        .to_json()
        .context("Failed to serialize snapshot")?;
    println!("{}", json);
    Ok(())
}
