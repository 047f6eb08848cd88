// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Collaborators owned by the host editor
//!
//! The editor surface and the execution engine live outside this crate;
//! commands reach them only through these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notebook::{Cell, CellOutput, DocumentUri};

/// Where an editor is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewColumn {
    /// The currently focused group
    Active,
    /// A group beside the focused one
    Beside,
    /// A specific group, counted from 1
    Index(u32),
}

/// The interactive window that currently has focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveInteractive {
    pub notebook: DocumentUri,
    pub input: DocumentUri,
}

/// Which edges of the input pane the text cursor touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorBoundary {
    Top,
    Bottom,
    Both,
    None,
}

impl CursorBoundary {
    /// Boundary for a cursor on `cursor_line` (0-based) of `text`
    pub fn compute(text: &str, cursor_line: usize) -> Self {
        let last_line = line_count(text) - 1;
        match (cursor_line == 0, cursor_line >= last_line) {
            (true, true) => CursorBoundary::Both,
            (true, false) => CursorBoundary::Top,
            (false, true) => CursorBoundary::Bottom,
            (false, false) => CursorBoundary::None,
        }
    }

    pub fn allows_previous(self) -> bool {
        matches!(self, CursorBoundary::Top | CursorBoundary::Both)
    }

    pub fn allows_next(self) -> bool {
        matches!(self, CursorBoundary::Bottom | CursorBoundary::Both)
    }
}

/// Number of lines in `text`; empty text still has one line
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Editor surface of the host application
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// The focused interactive window, if any
    fn active_interactive(&self) -> Option<ActiveInteractive>;

    /// Open an editor for a new interactive window
    async fn open_interactive_editor(
        &self,
        notebook: &DocumentUri,
        input: &DocumentUri,
        column: ViewColumn,
        title: &str,
    ) -> Result<()>;

    /// Bring an already open interactive window to the front
    async fn reveal(&self, notebook: &DocumentUri, column: ViewColumn) -> Result<()>;

    /// Current text of an input pane
    fn input_text(&self, input: &DocumentUri) -> Option<String>;

    /// Replace the text of an input pane
    fn set_input_text(&self, input: &DocumentUri, text: &str);

    /// Line (0-based) of the text cursor in an input pane
    fn cursor_line(&self, input: &DocumentUri) -> Option<usize>;

    /// Move the text cursor of an input pane to the start of `line`
    fn set_cursor_line(&self, input: &DocumentUri, line: usize);
}

/// Execution engine that runs cells and reports their outputs
#[async_trait]
pub trait NotebookExecutor: Send + Sync {
    async fn execute_cell(
        &self,
        notebook: &DocumentUri,
        index: usize,
        cell: &Cell,
    ) -> Result<Vec<CellOutput>>;
}
