// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! interactive - inspect and manage interactive window backups
//!
//! Entry point for the `interactive` CLI.

use clap::Parser;

use interactive_window::cli::{Cli, Commands};
use interactive_window::config::Settings;
use interactive_window::error::Result;

#[path = "main/cli_commands.rs"]
mod cli_commands;

use cli_commands::{run_backups_command, run_inspect, run_settings_command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if cli.verbose > 0 {
        if let Ok(parsed) = "interactive_window=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    match cli.command {
        Commands::Inspect(args) => {
            run_inspect(args, &cli.format).await?;
        }
        Commands::Backups(args) => {
            run_backups_command(args, &settings, &cli.format).await?;
        }
        Commands::Settings(args) => {
            run_settings_command(args, &settings, cli.config.as_deref())?;
        }
    }

    Ok(())
}
