// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines the command-line arguments and subcommands of `interactive`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect and manage interactive window backups
#[derive(Parser, Debug)]
#[command(name = "interactive")]
#[command(version, about = "Inspect and manage interactive window backups")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a backup buffer and print its cells
    Inspect(InspectArgs),

    /// Stored backup management
    Backups(BackupsArgs),

    /// Print the effective settings
    #[command(alias = "config")]
    Settings(SettingsArgs),
}

/// Arguments for the settings command
#[derive(Parser, Debug)]
pub struct SettingsArgs {
    /// Write the effective settings back to the settings file
    #[arg(long)]
    pub write: bool,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Backup file to decode
    pub file: PathBuf,
}

/// Arguments for backup management
#[derive(Parser, Debug)]
pub struct BackupsArgs {
    #[command(subcommand)]
    pub command: BackupCommands,
}

/// Backup subcommands
#[derive(Subcommand, Debug)]
pub enum BackupCommands {
    /// List stored backup files
    List,

    /// Print the cells stored for a document
    Show {
        /// Document locator, e.g. interactive:/Interactive-1.interactive
        resource: String,
    },

    /// Delete the backup stored for a document
    Discard {
        /// Document locator
        resource: String,
    },
}

/// Output format
#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
