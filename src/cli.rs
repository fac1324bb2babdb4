// CLI module - command-line argument parsing and handlers
//
// Top-level flags pick the initial view, the directory source and the
// output mode. Subcommands manage the config file:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// docfinder - browse and filter a doctor directory in the terminal
#[derive(Parser, Debug)]
#[command(name = "docfinder")]
#[command(version = VERSION)]
#[command(about = "Browse and filter a doctor directory in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Initial view: a query string or `path?query`
    /// (e.g. "search=dr&specialty=Dentist&sortBy=fees")
    #[arg(long, value_name = "QUERY")]
    pub view: Option<String>,

    /// Directory source: http(s) URL or local JSON file
    #[arg(long, value_name = "URL|PATH")]
    pub source: Option<String>,

    /// Print a JSON snapshot of the rendered view instead of starting the TUI
    #[arg(long)]
    pub headless: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

impl Cli {
    /// Flags override env and file values
    pub fn apply(&self, config: &mut Config) {
        if let Some(view) = &self.view {
            config.initial_view = view.clone();
        }
        if let Some(source) = &self.source {
            config.source_url = source.clone();
        }
        if self.headless {
            config.enable_tui = false;
        }
    }
}

/// Run a subcommand if one was given. Returns true if the process should exit.
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Some(Commands::Config { show, path, reset }) => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset()?;
            } else {
                // No flag provided, show help
                println!("Usage: docfinder config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
            }
            Ok(true)
        }
        None => Ok(false), // No subcommand, run the browser
    }
}

fn handle_config_path() -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("Could not determine config path");
    };
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("Could not determine config path");
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
