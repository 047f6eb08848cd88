// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Persisted editor state for interactive windows
//!
//! The host stores this string when the workbench shuts down and hands it
//! back on startup so the window can be reopened against its backup.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::notebook::{DocumentUri, INTERACTIVE_SCHEME};

/// Everything needed to reopen an interactive window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveWindowState {
    pub resource: DocumentUri,
    pub input_resource: DocumentUri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl InteractiveWindowState {
    pub fn new(resource: DocumentUri, input_resource: DocumentUri) -> Self {
        Self {
            resource,
            input_resource,
            title: None,
            language: None,
        }
    }

    /// Only windows backed by an interactive document are persisted
    pub fn can_serialize(&self) -> bool {
        self.resource.scheme() == INTERACTIVE_SCHEME
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse persisted state; anything unreadable is dropped
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("Ignoring unreadable interactive editor state: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_json_shape() {
        let mut state = InteractiveWindowState::new(
            DocumentUri::interactive(1),
            DocumentUri::interactive_input(1),
        );
        state.language = Some("python".to_string());

        let json = state.to_json().unwrap();
        assert!(json.contains("\"resource\":\"interactive:/Interactive-1.interactive\""));
        assert!(json.contains("\"inputResource\":\"interactive-input:/InteractiveInput-1\""));
        assert!(!json.contains("title"));

        assert_eq!(InteractiveWindowState::from_json(&json), Some(state));
    }

    #[test]
    fn test_state_rejects_garbage() {
        assert!(InteractiveWindowState::from_json("{").is_none());
        assert!(InteractiveWindowState::from_json(r#"{"resource":"nocolon"}"#).is_none());
    }

    #[test]
    fn test_can_serialize() {
        let state = InteractiveWindowState::new(
            DocumentUri::interactive(2),
            DocumentUri::interactive_input(2),
        );
        assert!(state.can_serialize());

        let foreign = InteractiveWindowState::new(
            DocumentUri::new("file", "/tmp/a.ipynb"),
            DocumentUri::interactive_input(2),
        );
        assert!(!foreign.can_serialize());
    }
}
