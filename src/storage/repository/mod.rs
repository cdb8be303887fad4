// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Repository layer providing typed access to document storage.
//!
//! Each repository provides the operations for a specific collection,
//! using the DocumentStorage for all file operations.

pub mod comments;
pub mod donations;
pub mod supplies;
pub mod users;

pub use comments::{CommentRepository, StoredComment};
pub use donations::{DonationRepository, DonationStatus, StoredDonation};
pub use supplies::{StoredSupply, SupplyFields, SupplyPatch, SupplyRepository};
pub use users::{StoredUser, UserRepository};
