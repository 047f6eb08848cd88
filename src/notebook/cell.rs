// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Cell types for interactive documents

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::InteractiveError;

/// Kind of a notebook cell, persisted as a small integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CellKind {
    Markup = 1,
    Code = 2,
}

impl TryFrom<u8> for CellKind {
    type Error = InteractiveError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CellKind::Markup),
            2 => Ok(CellKind::Code),
            other => Err(InteractiveError::InvalidInput(format!(
                "Unknown cell kind: {}",
                other
            ))),
        }
    }
}

impl From<CellKind> for u8 {
    fn from(kind: CellKind) -> Self {
        kind as u8
    }
}

/// A single payload of a cell output, keyed by mime type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputItem {
    pub mime: String,
    pub data: Vec<u8>,
}

impl OutputItem {
    pub fn new(mime: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// Create a UTF-8 text payload
    pub fn text(mime: impl Into<String>, text: &str) -> Self {
        Self::new(mime, text.as_bytes())
    }
}

/// One output produced by running a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOutput {
    pub output_id: String,
    pub items: Vec<OutputItem>,
}

impl CellOutput {
    pub fn new(output_id: impl Into<String>, items: Vec<OutputItem>) -> Self {
        Self {
            output_id: output_id.into(),
            items,
        }
    }
}

/// Live state of a notebook cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    pub language: String,
    pub source: String,
    /// Mime of the source text, when the kind alone does not determine it
    pub mime: Option<String>,
    pub metadata: Map<String, Value>,
    pub outputs: Vec<CellOutput>,
}

impl Cell {
    /// Create a code cell with no outputs
    pub fn code(language: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Code,
            language: language.into(),
            source: source.into(),
            mime: None,
            metadata: Map::new(),
            outputs: Vec::new(),
        }
    }

    /// Create a markdown cell
    pub fn markup(source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Markup,
            language: "markdown".to_string(),
            source: source.into(),
            mime: None,
            metadata: Map::new(),
            outputs: Vec::new(),
        }
    }
}

/// Initial content of a notebook document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotebookData {
    pub cells: Vec<Cell>,
    pub metadata: Map<String, Value>,
}

impl NotebookData {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            metadata: Map::new(),
        }
    }
}
