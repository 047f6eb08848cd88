// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Interactive window support for notebook editors.
//!
//! An interactive window pairs a notebook document holding executed cells
//! with an input pane for REPL-style submission. This crate provides:
//! - `history`: per-document input history with previous/next navigation
//! - `backup`: the backup buffer codec and an on-disk backup store
//! - `notebook`: cell model, document locators and the document registry
//! - `interactive`: host-facing commands, content provider and editor state
//! - `config`, `cli`: settings and the `interactive` inspection binary

pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod interactive;
pub mod notebook;

pub use error::{InteractiveError, Result};
