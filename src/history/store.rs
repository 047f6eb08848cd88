// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! History store implementation
//!
//! Logs are append-only; only `clear_history` discards entries. Unknown
//! documents behave as an empty log and are created on first touch.

use std::collections::HashMap;

use crate::notebook::DocumentUri;

/// Position of the navigation cursor within a document's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryCursor {
    /// Past the newest entry (fresh input)
    #[default]
    Bottom,
    /// Browsing the entry at this index
    At(usize),
}

/// Submitted input for a single document
#[derive(Debug, Clone, Default)]
pub struct DocumentHistory {
    entries: Vec<String>,
    cursor: HistoryCursor,
}

impl DocumentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return the cursor to the bottom
    pub fn add(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
        self.cursor = HistoryCursor::Bottom;
    }

    /// Step towards older entries
    pub fn previous(&mut self) -> Option<&str> {
        let index = match self.cursor {
            HistoryCursor::Bottom if self.entries.is_empty() => return None,
            HistoryCursor::Bottom => self.entries.len() - 1,
            HistoryCursor::At(0) => return None,
            HistoryCursor::At(i) => i - 1,
        };
        self.cursor = HistoryCursor::At(index);
        Some(&self.entries[index])
    }

    /// Step towards newer entries; stepping past the newest returns to the bottom
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            HistoryCursor::Bottom => None,
            HistoryCursor::At(i) if i + 1 < self.entries.len() => {
                self.cursor = HistoryCursor::At(i + 1);
                Some(&self.entries[i + 1])
            }
            HistoryCursor::At(_) => {
                self.cursor = HistoryCursor::Bottom;
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = HistoryCursor::Bottom;
    }

    pub fn cursor(&self) -> HistoryCursor {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-document input histories
#[derive(Debug, Default)]
pub struct InputHistoryStore {
    histories: HashMap<DocumentUri, DocumentHistory>,
}

impl InputHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn history_mut(&mut self, uri: &DocumentUri) -> &mut DocumentHistory {
        self.histories.entry(uri.clone()).or_default()
    }

    /// Record submitted text for a document
    pub fn add_to_history(&mut self, uri: &DocumentUri, text: impl Into<String>) {
        let history = self.history_mut(uri);
        history.add(text);
        tracing::debug!("History for {} now has {} entries", uri, history.len());
    }

    /// Move back one entry; `None` when there is nothing older
    pub fn get_previous_value(&mut self, uri: &DocumentUri) -> Option<String> {
        self.history_mut(uri).previous().map(str::to_string)
    }

    /// Move forward one entry; `None` at the bottom
    pub fn get_next_value(&mut self, uri: &DocumentUri) -> Option<String> {
        self.history_mut(uri).next().map(str::to_string)
    }

    /// Drop the log for a document
    pub fn clear_history(&mut self, uri: &DocumentUri) {
        if let Some(history) = self.histories.get_mut(uri) {
            tracing::debug!("Clearing {} history entries for {}", history.len(), uri);
            history.clear();
        }
    }

    /// Forget a document's log entirely
    pub fn remove_history(&mut self, uri: &DocumentUri) -> bool {
        self.histories.remove(uri).is_some()
    }

    pub fn history(&self, uri: &DocumentUri) -> Option<&DocumentHistory> {
        self.histories.get(uri)
    }
}
