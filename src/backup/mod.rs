// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Backup and restore of interactive documents
//!
//! Interactive documents have no file format of their own, so the backup
//! buffer is the only way their cells survive a restart. The codec turns
//! cells into a flat JSON buffer and back; the store keeps those buffers
//! on disk between sessions.

pub mod codec;
pub mod store;

pub use codec::{
    decode, encode_cells, BackupPayload, CellRecord, OutputItemRecord, OutputRecord,
};
pub use store::BackupStore;
