// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! In-memory host collaborators for tests and embedders
//!
//! `MockEditorHost` keeps input panes as plain strings with a cursor line,
//! and `MockExecutor` records every cell it is asked to run.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{InteractiveError, Result};
use crate::notebook::{Cell, CellOutput, DocumentUri};

use super::host::{line_count, ActiveInteractive, EditorHost, NotebookExecutor, ViewColumn};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Mock host lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

#[derive(Debug, Clone, Default)]
struct MockInput {
    text: String,
    cursor_line: usize,
}

#[derive(Debug, Default)]
struct MockEditorState {
    active: Option<ActiveInteractive>,
    inputs: HashMap<DocumentUri, MockInput>,
    opened: Vec<(DocumentUri, DocumentUri, ViewColumn, String)>,
    revealed: Vec<(DocumentUri, ViewColumn)>,
}

/// Editor host that keeps everything in memory
#[derive(Debug, Default)]
pub struct MockEditorHost {
    state: Mutex<MockEditorState>,
    fail_open: bool,
}

impl MockEditorHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `open_interactive_editor` call fail
    pub fn with_failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    /// Focus a window (or nothing)
    pub fn set_active(&self, active: Option<ActiveInteractive>) {
        lock(&self.state).active = active;
    }

    /// Replace the input text as if typed, leaving the cursor on the last line
    pub fn type_input(&self, input: &DocumentUri, text: &str) {
        let mut state = lock(&self.state);
        let entry = state.inputs.entry(input.clone()).or_default();
        entry.text = text.to_string();
        entry.cursor_line = line_count(text) - 1;
    }

    /// Move the cursor of an input pane
    pub fn move_cursor(&self, input: &DocumentUri, line: usize) {
        lock(&self.state)
            .inputs
            .entry(input.clone())
            .or_default()
            .cursor_line = line;
    }

    pub fn text(&self, input: &DocumentUri) -> Option<String> {
        lock(&self.state).inputs.get(input).map(|i| i.text.clone())
    }

    pub fn cursor(&self, input: &DocumentUri) -> Option<usize> {
        lock(&self.state).inputs.get(input).map(|i| i.cursor_line)
    }

    /// Editors opened so far: (notebook, input, column, title)
    pub fn opened(&self) -> Vec<(DocumentUri, DocumentUri, ViewColumn, String)> {
        lock(&self.state).opened.clone()
    }

    pub fn revealed(&self) -> Vec<(DocumentUri, ViewColumn)> {
        lock(&self.state).revealed.clone()
    }
}

#[async_trait]
impl EditorHost for MockEditorHost {
    fn active_interactive(&self) -> Option<ActiveInteractive> {
        lock(&self.state).active.clone()
    }

    async fn open_interactive_editor(
        &self,
        notebook: &DocumentUri,
        input: &DocumentUri,
        column: ViewColumn,
        title: &str,
    ) -> Result<()> {
        if self.fail_open {
            return Err(InteractiveError::Editor(format!(
                "Cannot open editor for {}",
                notebook
            )));
        }

        let mut state = lock(&self.state);
        state.opened.push((
            notebook.clone(),
            input.clone(),
            column,
            title.to_string(),
        ));
        state.inputs.insert(input.clone(), MockInput::default());
        state.active = Some(ActiveInteractive {
            notebook: notebook.clone(),
            input: input.clone(),
        });
        Ok(())
    }

    async fn reveal(&self, notebook: &DocumentUri, column: ViewColumn) -> Result<()> {
        lock(&self.state).revealed.push((notebook.clone(), column));
        Ok(())
    }

    fn input_text(&self, input: &DocumentUri) -> Option<String> {
        self.text(input)
    }

    fn set_input_text(&self, input: &DocumentUri, text: &str) {
        let mut state = lock(&self.state);
        let entry = state.inputs.entry(input.clone()).or_default();
        entry.text = text.to_string();
        entry.cursor_line = entry.cursor_line.min(line_count(text) - 1);
    }

    fn cursor_line(&self, input: &DocumentUri) -> Option<usize> {
        self.cursor(input)
    }

    fn set_cursor_line(&self, input: &DocumentUri, line: usize) {
        self.move_cursor(input, line);
    }
}

/// Executor that records submitted cells and replies with canned outputs
#[derive(Debug, Default)]
pub struct MockExecutor {
    executed: Mutex<Vec<(DocumentUri, usize, String)>>,
    outputs: Vec<CellOutput>,
    failure: Option<String>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outputs returned for every executed cell
    pub fn with_outputs(mut self, outputs: Vec<CellOutput>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Fail every execution with `message`
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Cells executed so far: (notebook, index, source)
    pub fn executed(&self) -> Vec<(DocumentUri, usize, String)> {
        lock(&self.executed).clone()
    }
}

#[async_trait]
impl NotebookExecutor for MockExecutor {
    async fn execute_cell(
        &self,
        notebook: &DocumentUri,
        index: usize,
        cell: &Cell,
    ) -> Result<Vec<CellOutput>> {
        lock(&self.executed).push((notebook.clone(), index, cell.source.clone()));
        match &self.failure {
            Some(message) => Err(InteractiveError::Execution(message.clone())),
            None => Ok(self.outputs.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_input_moves_cursor_to_last_line() {
        let host = MockEditorHost::new();
        let input = DocumentUri::interactive_input(1);
        host.type_input(&input, "a\nb\nc");
        assert_eq!(host.cursor(&input), Some(2));
        assert_eq!(host.input_text(&input).as_deref(), Some("a\nb\nc"));
    }

    #[test]
    fn test_set_input_text_clamps_cursor() {
        let host = MockEditorHost::new();
        let input = DocumentUri::interactive_input(1);
        host.type_input(&input, "a\nb\nc");
        host.set_input_text(&input, "");
        assert_eq!(host.cursor(&input), Some(0));
    }

    #[tokio::test]
    async fn test_executor_failure() {
        let executor = MockExecutor::new().failing("kernel died");
        let result = executor
            .execute_cell(&DocumentUri::interactive(1), 0, &Cell::code("python", "1"))
            .await;
        assert!(matches!(result, Err(InteractiveError::Execution(_))));
        assert_eq!(executor.executed().len(), 1);
    }
}
