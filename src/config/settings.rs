// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for the interactive window
//!
//! Handles loading and saving settings from ~/.interactive/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::interactive::ViewColumn;

mod io;

/// Main settings structure, stored in ~/.interactive/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Interactive window behavior
    #[serde(default)]
    pub interactive: InteractiveConfig,

    /// Backup persistence settings
    #[serde(default)]
    pub backup: BackupConfig,
}

/// Behavior of interactive windows and their commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveConfig {
    /// Language used for submitted cells when the input pane reports none
    #[serde(default = "default_language")]
    pub default_language: String,

    /// View column used by `open` when the caller does not pick one
    #[serde(default = "default_column")]
    pub default_column: ViewColumn,

    /// Run a cell through the executor as soon as it is submitted
    #[serde(default = "default_true")]
    pub execute_on_submit: bool,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_column: default_column(),
            execute_on_submit: true,
        }
    }
}

/// Where backup buffers are persisted
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackupConfig {
    /// Backup directory (None = <home>/backups)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

fn default_language() -> String {
    "python".to_string()
}

fn default_column() -> ViewColumn {
    ViewColumn::Beside
}

fn default_true() -> bool {
    true
}
