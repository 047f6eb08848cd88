// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Open notebook documents and the edits applied to them

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::{InteractiveError, Result};

use super::cell::{Cell, CellOutput, NotebookData};
use super::uri::DocumentUri;

/// An open notebook document
#[derive(Debug, Clone)]
pub struct NotebookDocument {
    pub uri: DocumentUri,
    pub cells: Vec<Cell>,
    pub metadata: Map<String, Value>,
    /// Bumped once per applied edit batch
    pub version: u64,
}

impl NotebookDocument {
    pub fn new(uri: DocumentUri, data: NotebookData) -> Self {
        Self {
            uri,
            cells: data.cells,
            metadata: data.metadata,
            version: 0,
        }
    }
}

/// A single edit in a bulk cell edit
#[derive(Debug, Clone)]
pub enum CellEdit {
    /// Replace `count` cells starting at `index` with `cells`
    Replace {
        index: usize,
        count: usize,
        cells: Vec<Cell>,
    },
    /// Replace or extend the outputs of the cell at `index`
    Outputs {
        index: usize,
        outputs: Vec<CellOutput>,
        append: bool,
    },
}

/// Registry of open notebook documents
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: HashMap<DocumentUri, NotebookDocument>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document with the given content, replacing any open one
    pub fn open(&mut self, uri: DocumentUri, data: NotebookData) -> &NotebookDocument {
        tracing::debug!("Opening notebook {} with {} cells", uri, data.cells.len());
        self.documents
            .insert(uri.clone(), NotebookDocument::new(uri.clone(), data));
        &self.documents[&uri]
    }

    pub fn get(&self, uri: &DocumentUri) -> Option<&NotebookDocument> {
        self.documents.get(uri)
    }

    pub fn contains(&self, uri: &DocumentUri) -> bool {
        self.documents.contains_key(uri)
    }

    /// Close a document, returning its final state
    pub fn close(&mut self, uri: &DocumentUri) -> Option<NotebookDocument> {
        tracing::debug!("Closing notebook {}", uri);
        self.documents.remove(uri)
    }

    /// Locators of all open documents
    pub fn uris(&self) -> impl Iterator<Item = &DocumentUri> {
        self.documents.keys()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Apply a batch of edits to a document.
    ///
    /// The batch is applied atomically: if any edit is out of range the
    /// document is left untouched.
    pub fn apply_edits(&mut self, uri: &DocumentUri, edits: Vec<CellEdit>) -> Result<()> {
        let document = self
            .documents
            .get_mut(uri)
            .ok_or_else(|| InteractiveError::Document(format!("Document not open: {}", uri)))?;

        let mut cells = document.cells.clone();
        for edit in edits {
            apply_edit(&mut cells, edit)?;
        }

        document.cells = cells;
        document.version += 1;
        Ok(())
    }
}

fn apply_edit(cells: &mut Vec<Cell>, edit: CellEdit) -> Result<()> {
    match edit {
        CellEdit::Replace {
            index,
            count,
            cells: replacement,
        } => {
            let end = index.checked_add(count).filter(|end| *end <= cells.len());
            let Some(end) = end else {
                return Err(InteractiveError::InvalidInput(format!(
                    "Replacing {} cells at {} exceeds {} cells",
                    count,
                    index,
                    cells.len()
                )));
            };
            cells.splice(index..end, replacement);
        }
        CellEdit::Outputs {
            index,
            outputs,
            append,
        } => {
            let total = cells.len();
            let cell = cells.get_mut(index).ok_or_else(|| {
                InteractiveError::InvalidInput(format!(
                    "Cell index {} out of range ({} cells)",
                    index, total
                ))
            })?;
            if append {
                cell.outputs.extend(outputs);
            } else {
                cell.outputs = outputs;
            }
        }
    }
    Ok(())
}
