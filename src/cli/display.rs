// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Rendering of decoded backups for the terminal

use serde_json::json;

use crate::error::Result;
use crate::notebook::{CellKind, NotebookData};

use super::args::OutputFormat;

const PREVIEW_CHARS: usize = 60;

/// First line of `source`, shortened for a one-line listing
pub fn preview(source: &str) -> String {
    let first = source.lines().next().unwrap_or_default();
    let truncated: String = first.chars().take(PREVIEW_CHARS).collect();
    if truncated.len() < first.len() || source.lines().nth(1).is_some() {
        format!("{}...", truncated)
    } else {
        truncated
    }
}

/// Render the cells of a restored notebook
pub fn format_notebook(data: &NotebookData, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let cells: Vec<_> = data
                .cells
                .iter()
                .map(|cell| {
                    json!({
                        "kind": u8::from(cell.kind),
                        "language": cell.language,
                        "source": cell.source,
                        "outputs": cell.outputs.len(),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&json!({ "cells": cells }))?)
        }
        OutputFormat::Text => {
            if data.cells.is_empty() {
                return Ok("(no cells)".to_string());
            }
            let lines: Vec<String> = data
                .cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let kind = match cell.kind {
                        CellKind::Code => "code",
                        CellKind::Markup => "markup",
                    };
                    format!(
                        "[{}] {} ({}, {} outputs): {}",
                        i,
                        kind,
                        cell.language,
                        cell.outputs.len(),
                        preview(&cell.source)
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
