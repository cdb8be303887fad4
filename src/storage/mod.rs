// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Document Storage Module
//!
//! Persistent storage for the relief goods collections. Every record is a
//! single JSON document on the local filesystem; mutations are atomic at the
//! single-document level (temp file + rename) and there are no multi-record
//! transactions.
//!
//! ## Storage Layout
//!
//! ```text
//! /data/
//!   users/{user_id}.json        # User accounts (hashed credentials)
//!   supplies/{supply_id}.json   # Supply items
//!   donations/{donation_id}.json
//!   comments/{comment_id}.json
//! ```

pub mod document_fs;
pub mod paths;
pub mod repository;

pub use document_fs::{DocumentStorage, StorageError, StorageResult};
pub use paths::StoragePaths;
pub use repository::{
    CommentRepository, DonationRepository, DonationStatus, StoredComment, StoredDonation,
    StoredSupply, StoredUser, SupplyFields, SupplyPatch, SupplyRepository, UserRepository,
};
