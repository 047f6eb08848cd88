// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Commands exposed to the host for interactive windows
//!
//! Every command degrades to a no-op when its editor context is missing.
//! Errors are only returned when a host collaborator itself fails.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::backup::BackupStore;
use crate::config::InteractiveConfig;
use crate::error::Result;
use crate::history::InputHistoryStore;
use crate::notebook::{mint_pair, Cell, CellEdit, DocumentRegistry, DocumentUri, NotebookData};

use super::host::{line_count, CursorBoundary, EditorHost, NotebookExecutor, ViewColumn};
use super::provider::{InteractiveContentProvider, RestoredDocument};
use super::serializer::InteractiveWindowState;

/// Arguments of the open-interactive-window command
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    /// Column to show the window in (None = configured default)
    pub column: Option<ViewColumn>,
    /// Existing interactive document to reveal instead of creating one
    pub resource: Option<DocumentUri>,
    /// Editor title (None = derived from the minted locator)
    pub title: Option<String>,
}

/// Interactive window commands and the state they share
pub struct InteractiveWindow {
    config: InteractiveConfig,
    documents: DocumentRegistry,
    history: InputHistoryStore,
    provider: InteractiveContentProvider,
    windows: HashMap<DocumentUri, InteractiveWindowState>,
    editor: Arc<dyn EditorHost>,
    executor: Arc<dyn NotebookExecutor>,
}

impl InteractiveWindow {
    pub fn new(
        config: InteractiveConfig,
        editor: Arc<dyn EditorHost>,
        executor: Arc<dyn NotebookExecutor>,
    ) -> Self {
        Self {
            config,
            documents: DocumentRegistry::new(),
            history: InputHistoryStore::new(),
            provider: InteractiveContentProvider::new(),
            windows: HashMap::new(),
            editor,
            executor,
        }
    }

    pub fn documents(&self) -> &DocumentRegistry {
        &self.documents
    }

    pub fn history(&self) -> &InputHistoryStore {
        &self.history
    }

    pub fn provider(&self) -> &InteractiveContentProvider {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut InteractiveContentProvider {
        &mut self.provider
    }

    /// State of the open window backed by `notebook`
    pub fn window(&self, notebook: &DocumentUri) -> Option<&InteractiveWindowState> {
        self.windows.get(notebook)
    }

    /// Open an interactive window, or reveal the one already showing `resource`.
    ///
    /// Returns the notebook and input pane locators.
    pub async fn open(&mut self, options: OpenOptions) -> Result<(DocumentUri, DocumentUri)> {
        let column = options.column.unwrap_or(self.config.default_column);

        if let Some(resource) = &options.resource {
            if let Some(state) = self.windows.get(resource) {
                tracing::debug!("Revealing existing interactive window {}", resource);
                self.editor.reveal(resource, column).await?;
                return Ok((state.resource.clone(), state.input_resource.clone()));
            }
        }

        let (notebook, input) = mint_pair(self.windows.keys().chain(self.documents.uris()));
        let title = options
            .title
            .unwrap_or_else(|| format!("Interactive-{}", notebook.suffix().unwrap_or_default()));

        self.documents.open(notebook.clone(), NotebookData::default());
        self.history.clear_history(&notebook);

        if let Err(e) = self
            .editor
            .open_interactive_editor(&notebook, &input, column, &title)
            .await
        {
            self.documents.close(&notebook);
            return Err(e);
        }

        tracing::info!("Opened interactive window {} ({})", notebook, input);
        self.windows.insert(
            notebook.clone(),
            InteractiveWindowState {
                resource: notebook.clone(),
                input_resource: input.clone(),
                title: Some(title),
                language: Some(self.config.default_language.clone()),
            },
        );
        Ok((notebook, input))
    }

    /// Close a window and its document; returns whether it was open
    pub fn close(&mut self, notebook: &DocumentUri) -> bool {
        let had_window = self.windows.remove(notebook).is_some();
        let had_document = self.documents.close(notebook).is_some();
        self.history.remove_history(notebook);
        had_window || had_document
    }

    /// Submit the input pane as a new code cell.
    ///
    /// Returns the index of the appended cell, or `None` when there was
    /// nothing to run.
    pub async fn execute(&mut self, target: Option<&DocumentUri>) -> Result<Option<usize>> {
        let Some(state) = self.resolve(target) else {
            tracing::debug!("Execute requested without an interactive window");
            return Ok(None);
        };
        let notebook = state.resource;
        let input = state.input_resource;

        let Some(text) = self.editor.input_text(&input) else {
            return Ok(None);
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        let Some(document) = self.documents.get(&notebook) else {
            tracing::warn!("Interactive document {} is not open", notebook);
            return Ok(None);
        };
        let index = document.cells.len();

        let language = state
            .language
            .unwrap_or_else(|| self.config.default_language.clone());
        let cell = Cell::code(language, text.clone());

        self.history.add_to_history(&notebook, text);
        self.editor.set_input_text(&input, "");
        self.documents.apply_edits(
            &notebook,
            vec![CellEdit::Replace {
                index,
                count: 0,
                cells: vec![cell.clone()],
            }],
        )?;

        if self.config.execute_on_submit {
            let outputs = self.executor.execute_cell(&notebook, index, &cell).await?;
            if !outputs.is_empty() && self.documents.contains(&notebook) {
                self.documents.apply_edits(
                    &notebook,
                    vec![CellEdit::Outputs {
                        index,
                        outputs,
                        append: false,
                    }],
                )?;
            }
        }

        Ok(Some(index))
    }

    /// Replace the input pane with the previous history entry.
    ///
    /// Only active when the cursor is on the first line of the input.
    pub fn history_previous(&mut self) -> bool {
        let Some((notebook, input, boundary)) = self.history_context() else {
            return false;
        };
        if !boundary.allows_previous() {
            return false;
        }
        match self.history.get_previous_value(&notebook) {
            Some(value) => {
                self.editor.set_input_text(&input, &value);
                self.editor.set_cursor_line(&input, 0);
                true
            }
            None => false,
        }
    }

    /// Replace the input pane with the next history entry.
    ///
    /// Only active when the cursor is on the last line of the input.
    pub fn history_next(&mut self) -> bool {
        let Some((notebook, input, boundary)) = self.history_context() else {
            return false;
        };
        if !boundary.allows_next() {
            return false;
        }
        match self.history.get_next_value(&notebook) {
            Some(value) => {
                self.editor.set_input_text(&input, &value);
                self.editor.set_cursor_line(&input, line_count(&value) - 1);
                true
            }
            None => false,
        }
    }

    /// Persisted editor state for `notebook`, if it is an open window
    pub fn serialize_window(&self, notebook: &DocumentUri) -> Result<Option<String>> {
        match self.windows.get(notebook) {
            Some(state) if state.can_serialize() => state.to_json().map(Some),
            _ => Ok(None),
        }
    }

    /// Reopen a window from persisted editor state, restoring its cells
    /// from `store`. Unreadable state is ignored and an unreadable backup
    /// starts the window empty.
    ///
    /// When the window is already open its cells are only restored if it
    /// is still empty.
    pub async fn restore_window(
        &mut self,
        serialized: &str,
        store: &BackupStore,
    ) -> Result<Option<(DocumentUri, DocumentUri)>> {
        let Some(state) = InteractiveWindowState::from_json(serialized) else {
            return Ok(None);
        };

        if let Some(existing) = self.windows.get(&state.resource) {
            let pair = (existing.resource.clone(), existing.input_resource.clone());
            let document_is_empty = self
                .documents
                .get(&pair.0)
                .map_or(true, |document| document.cells.is_empty());
            if !document_is_empty {
                tracing::warn!(
                    "Interactive window {} already has cells, skipping its backup",
                    pair.0
                );
                return Ok(Some(pair));
            }

            let restored = self.read_backup(&pair.0, store).await;
            if self.documents.contains(&pair.0) {
                if !restored.data.cells.is_empty() {
                    self.documents.apply_edits(
                        &pair.0,
                        vec![CellEdit::Replace {
                            index: 0,
                            count: 0,
                            cells: restored.data.cells,
                        }],
                    )?;
                }
            } else {
                self.documents.open(pair.0.clone(), restored.data);
            }
            return Ok(Some(pair));
        }

        let restored = self.read_backup(&state.resource, store).await;
        tracing::info!(
            "Restored interactive window {} with {} cells",
            state.resource,
            restored.data.cells.len()
        );

        let pair = (state.resource.clone(), state.input_resource.clone());
        self.documents.open(state.resource.clone(), restored.data);
        self.windows.insert(state.resource.clone(), state);
        Ok(Some(pair))
    }

    /// Encode the current cells of `notebook`
    pub async fn backup(&self, notebook: &DocumentUri) -> Result<Option<Vec<u8>>> {
        self.provider.backup(&self.documents, notebook).await
    }

    /// Write the backup of `notebook` to `store`
    pub async fn persist_backup(
        &self,
        notebook: &DocumentUri,
        store: &BackupStore,
    ) -> Result<Option<PathBuf>> {
        match self.backup(notebook).await? {
            Some(buffer) => store.write(notebook, &buffer).await.map(Some),
            None => Ok(None),
        }
    }

    /// Saving an interactive document never succeeds
    pub fn save(&self, notebook: &DocumentUri) -> bool {
        self.provider.save(notebook)
    }

    async fn read_backup(&self, notebook: &DocumentUri, store: &BackupStore) -> RestoredDocument {
        match store.read(notebook).await {
            Ok(Some(buffer)) => self.provider.restore(&buffer).await,
            Ok(None) => RestoredDocument::empty(),
            Err(e) => {
                tracing::warn!("Could not read backup for {}: {}", notebook, e);
                RestoredDocument::empty()
            }
        }
    }

    fn resolve(&self, target: Option<&DocumentUri>) -> Option<InteractiveWindowState> {
        match target {
            Some(uri) => self.windows.get(uri).cloned(),
            None => {
                let active = self.editor.active_interactive()?;
                let tracked = self.windows.get(&active.notebook).cloned();
                Some(tracked.unwrap_or_else(|| {
                    InteractiveWindowState::new(active.notebook, active.input)
                }))
            }
        }
    }

    fn history_context(&self) -> Option<(DocumentUri, DocumentUri, CursorBoundary)> {
        let active = self.editor.active_interactive()?;
        let text = self.editor.input_text(&active.input)?;
        let line = self.editor.cursor_line(&active.input)?;
        let boundary = CursorBoundary::compute(&text, line);
        Some((active.notebook, active.input, boundary))
    }
}
