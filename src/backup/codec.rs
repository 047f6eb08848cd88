// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Backup buffer codec
//!
//! The buffer is UTF-8 JSON shaped as `{"cells": [CellRecord...]}`. Output
//! payloads are written as plain arrays of byte values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::notebook::{Cell, CellKind, CellOutput, NotebookData, OutputItem};

/// Top-level shape of a backup buffer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupPayload {
    pub cells: Vec<CellRecord>,
}

/// Serialized form of a single cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    pub kind: CellKind,
    pub language: String,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    pub content: String,
    #[serde(default)]
    pub outputs: Vec<OutputRecord>,
}

/// Serialized form of a cell output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub output_id: String,
    pub outputs: Vec<OutputItemRecord>,
}

/// Serialized form of an output payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputItemRecord {
    pub mime: String,
    pub data: Vec<u8>,
}

impl From<&Cell> for CellRecord {
    fn from(cell: &Cell) -> Self {
        Self {
            kind: cell.kind,
            language: cell.language.clone(),
            metadata: cell.metadata.clone(),
            mime: cell.mime.clone(),
            content: cell.source.clone(),
            outputs: cell.outputs.iter().map(OutputRecord::from).collect(),
        }
    }
}

impl From<&CellOutput> for OutputRecord {
    fn from(output: &CellOutput) -> Self {
        Self {
            output_id: output.output_id.clone(),
            outputs: output
                .items
                .iter()
                .map(|item| OutputItemRecord {
                    mime: item.mime.clone(),
                    data: item.data.clone(),
                })
                .collect(),
        }
    }
}

impl From<CellRecord> for Cell {
    fn from(record: CellRecord) -> Self {
        Self {
            kind: record.kind,
            language: record.language,
            source: record.content,
            mime: record.mime,
            metadata: record.metadata,
            outputs: record
                .outputs
                .into_iter()
                .map(|output| CellOutput {
                    output_id: output.output_id,
                    items: output
                        .outputs
                        .into_iter()
                        .map(|item| OutputItem::new(item.mime, item.data))
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Encode cells into a backup buffer
pub fn encode_cells(cells: &[Cell]) -> Result<Vec<u8>> {
    let payload = BackupPayload {
        cells: cells.iter().map(CellRecord::from).collect(),
    };
    Ok(serde_json::to_vec(&payload)?)
}

/// Decode a backup buffer into initial notebook content.
///
/// A buffer that does not parse yields an empty notebook.
pub fn decode(buffer: &[u8]) -> NotebookData {
    match serde_json::from_slice::<BackupPayload>(buffer) {
        Ok(payload) => NotebookData::new(payload.cells.into_iter().map(Cell::from).collect()),
        Err(e) => {
            tracing::warn!("Discarding unreadable interactive backup: {}", e);
            NotebookData::default()
        }
    }
}
