// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Donation record repository.
//!
//! Donations are append-only: records are inserted with a server-side
//! timestamp and a fixed `Pending` status, and never modified afterwards.
//! Each record is stored as a separate JSON file under `/data/donations/`.
//!
//! The donation payload (`donationInfo`) is arbitrary JSON from the client;
//! the monthly report in [`crate::reports`] digs the donated amount out of
//! it at read time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{DocumentStorage, StorageResult};

/// Donation processing status.
///
/// Fixed at creation; fulfilment happens outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DonationStatus {
    /// Donation recorded, awaiting processing
    Pending,
}

impl Default for DonationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Donation record stored on the document filesystem.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredDonation {
    /// Unique donation identifier (UUID)
    pub id: String,
    /// Arbitrary donation payload from the client
    #[schema(value_type = Object)]
    pub donation_info: serde_json::Value,
    /// When the donation was recorded (server clock at insert)
    pub donation_date: DateTime<Utc>,
    /// Processing status, fixed at creation
    pub status: DonationStatus,
}

/// Repository for donation record operations on document storage.
pub struct DonationRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> DonationRepository<'a> {
    /// Create a new DonationRepository.
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// List all donation records, in no defined order.
    pub fn list_all(&self) -> StorageResult<Vec<StoredDonation>> {
        let donation_ids = self
            .storage
            .list_files(self.storage.paths().donations_dir(), "json")?;

        let mut donations = Vec::new();
        for id in donation_ids {
            donations.push(
                self.storage
                    .read_json(self.storage.paths().donation(&id))?,
            );
        }

        Ok(donations)
    }

    /// Record a new donation with the given payload and timestamp.
    pub fn create(
        &self,
        donation_info: serde_json::Value,
        now: DateTime<Utc>,
    ) -> StorageResult<StoredDonation> {
        let donation = StoredDonation {
            id: uuid::Uuid::new_v4().to_string(),
            donation_info,
            donation_date: now,
            status: DonationStatus::Pending,
        };

        self.storage
            .write_json(self.storage.paths().donation(&donation.id), &donation)?;
        Ok(donation)
    }
}
