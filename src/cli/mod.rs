// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI module for the `interactive` binary
//!
//! Handles command-line argument parsing and output rendering.

pub mod args;
pub mod display;

pub use args::*;
pub use display::{format_notebook, preview};
