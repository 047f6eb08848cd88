// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! In-memory notebook model for interactive documents
//!
//! Interactive documents are plain notebooks addressed by a pair of minted
//! locators. The registry is an explicit object handed to whoever needs it
//! rather than a process-wide singleton.

pub mod cell;
pub mod document;
pub mod uri;

pub use cell::{Cell, CellKind, CellOutput, NotebookData, OutputItem};
pub use document::{CellEdit, DocumentRegistry, NotebookDocument};
pub use uri::{mint_pair, DocumentUri, INTERACTIVE_INPUT_SCHEME, INTERACTIVE_SCHEME};
