// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::path::Path;

use interactive_window::backup::BackupStore;
use interactive_window::cli::{
    format_notebook, BackupCommands, BackupsArgs, InspectArgs, OutputFormat, SettingsArgs,
};
use interactive_window::config::Settings;
use interactive_window::error::Result;
use interactive_window::interactive::InteractiveContentProvider;
use interactive_window::notebook::DocumentUri;

/// Decode a backup file and print its cells
pub(super) async fn run_inspect(args: InspectArgs, format: &OutputFormat) -> Result<()> {
    let buffer = tokio::fs::read(&args.file).await?;
    let restored = InteractiveContentProvider::new().restore(&buffer).await;
    println!("{}", format_notebook(&restored.data, format)?);
    Ok(())
}

pub(super) async fn run_backups_command(
    args: BackupsArgs,
    settings: &Settings,
    format: &OutputFormat,
) -> Result<()> {
    let store = BackupStore::from_settings(settings);

    match args.command {
        BackupCommands::List => {
            let paths = store.list().await?;

            if paths.is_empty() {
                println!("\nNo backups in {}.\n", store.dir().display());
                return Ok(());
            }

            println!("\nBackups in {}:\n", store.dir().display());
            for path in paths {
                let size = tokio::fs::metadata(&path)
                    .await
                    .map(|m| m.len())
                    .unwrap_or(0);
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("?");
                println!("  {} | {} bytes", name, size);
            }
            println!();
        }

        BackupCommands::Show { resource } => {
            let uri: DocumentUri = resource.parse()?;
            match store.read(&uri).await? {
                Some(buffer) => {
                    let restored = InteractiveContentProvider::new().restore(&buffer).await;
                    println!("{}", format_notebook(&restored.data, format)?);
                }
                None => println!("\nNo backup stored for {}.\n", uri),
            }
        }

        BackupCommands::Discard { resource } => {
            let uri: DocumentUri = resource.parse()?;
            if store.discard(&uri).await? {
                println!("Discarded backup for {}.", uri);
            } else {
                println!("No backup stored for {}.", uri);
            }
        }
    }

    Ok(())
}

/// Print the effective settings as JSON, optionally writing them back
pub(super) fn run_settings_command(
    args: SettingsArgs,
    settings: &Settings,
    config: Option<&Path>,
) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    println!("\nBackup directory: {}", settings.backup_dir().display());

    if args.write {
        let path = match config {
            Some(path) => {
                settings.save_to(path)?;
                path.to_path_buf()
            }
            None => {
                settings.save()?;
                Settings::default_path()
            }
        };
        println!("Settings written to {}", path.display());
    }
    Ok(())
}
