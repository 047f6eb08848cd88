// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Content provider for interactive documents
//!
//! Interactive documents are never saved to a file. `save` and `save_as`
//! always report failure, which leaves the backup path as the only way
//! their content survives.

use crate::backup::codec;
use crate::error::Result;
use crate::notebook::{DocumentRegistry, DocumentUri, NotebookData};

/// Which parts of a document are excluded from normal persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientOptions {
    pub transient_outputs: bool,
    pub transient_cell_metadata: bool,
    pub transient_document_metadata: bool,
}

impl TransientOptions {
    /// Everything goes through backup instead of save
    pub const fn backup_only() -> Self {
        Self {
            transient_outputs: true,
            transient_cell_metadata: true,
            transient_document_metadata: true,
        }
    }
}

impl Default for TransientOptions {
    fn default() -> Self {
        Self::backup_only()
    }
}

/// Initial state of a document rebuilt from a backup buffer
#[derive(Debug, Clone, PartialEq)]
pub struct RestoredDocument {
    pub data: NotebookData,
    pub transient_options: TransientOptions,
}

impl RestoredDocument {
    pub fn empty() -> Self {
        Self {
            data: NotebookData::default(),
            transient_options: TransientOptions::backup_only(),
        }
    }
}

/// Content provider registered for the interactive notebook type
#[derive(Debug, Clone, Default)]
pub struct InteractiveContentProvider {
    options: TransientOptions,
}

impl InteractiveContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> TransientOptions {
        self.options
    }

    pub fn update_options(&mut self, options: TransientOptions) {
        tracing::debug!("Updating interactive content options: {:?}", options);
        self.options = options;
    }

    pub fn save(&self, _uri: &DocumentUri) -> bool {
        false
    }

    pub fn save_as(&self, _uri: &DocumentUri, _target: &DocumentUri) -> bool {
        false
    }

    /// Encode the current cells of `uri`; `None` when the document is not open
    pub async fn backup(
        &self,
        documents: &DocumentRegistry,
        uri: &DocumentUri,
    ) -> Result<Option<Vec<u8>>> {
        tokio::task::yield_now().await;

        let Some(document) = documents.get(uri) else {
            tracing::debug!("No open document to back up for {}", uri);
            return Ok(None);
        };
        codec::encode_cells(&document.cells).map(Some)
    }

    /// Rebuild initial document state from a backup buffer
    pub async fn restore(&self, buffer: &[u8]) -> RestoredDocument {
        tokio::task::yield_now().await;

        RestoredDocument {
            data: codec::decode(buffer),
            transient_options: TransientOptions::backup_only(),
        }
    }
}
