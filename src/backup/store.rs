// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! On-disk store for backup buffers
//!
//! One file per document, named after a hash of its locator.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{InteractiveError, Result};
use crate::notebook::DocumentUri;

/// Directory of persisted backup buffers
#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the configured backup directory
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.backup_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the backup of `uri`
    pub fn path_for(&self, uri: &DocumentUri) -> PathBuf {
        let digest = format!("{:x}", Sha256::digest(uri.to_string().as_bytes()));
        self.dir.join(format!("{}.json", &digest[..16]))
    }

    /// Persist a backup buffer, replacing any previous one
    pub async fn write(&self, uri: &DocumentUri, buffer: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.path_for(uri);
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, buffer).await?;
        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            InteractiveError::Backup(format!("Failed to move backup into place: {}", e))
        })?;

        tracing::debug!("Wrote {} byte backup for {} to {:?}", buffer.len(), uri, path);
        Ok(path)
    }

    /// Read the backup of `uri`, if one was written
    pub async fn read(&self, uri: &DocumentUri) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.path_for(uri)).await {
            Ok(buffer) => Ok(Some(buffer)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the backup of `uri`; returns whether one existed
    pub async fn discard(&self, uri: &DocumentUri) -> Result<bool> {
        match tokio::fs::remove_file(self.path_for(uri)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// All backup files in the store, sorted by path
    pub async fn list(&self) -> Result<Vec<PathBuf>> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}
