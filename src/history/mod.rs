// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input history for interactive windows
//!
//! Every interactive document keeps its own log of submitted input and a
//! cursor for walking backwards and forwards through it.

pub mod store;

pub use store::{DocumentHistory, HistoryCursor, InputHistoryStore};
