// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Interactive window integration
//!
//! Wires the history store and backup codec into the commands the host
//! exposes:
//! - `commands`: open, execute, history navigation, backup and restore
//! - `provider`: content provider with its transient options
//! - `serializer`: editor state persisted across restarts
//! - `host`: traits for the editor surface and the execution engine
//! - `mock`: in-memory implementations of those traits

pub mod commands;
pub mod host;
pub mod mock;
pub mod provider;
pub mod serializer;

pub use commands::{InteractiveWindow, OpenOptions};
pub use host::{ActiveInteractive, CursorBoundary, EditorHost, NotebookExecutor, ViewColumn};
pub use provider::{InteractiveContentProvider, RestoredDocument, TransientOptions};
pub use serializer::InteractiveWindowState;
