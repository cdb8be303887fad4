// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation. Wire field names follow the original site contract
//! (camelCase where the contract fixes them).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::storage::StoredDonation;

// =============================================================================
// Server Status
// =============================================================================

/// Body of `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServerStatus {
    /// Human-readable status line.
    pub message: String,
    /// Server clock when the request was handled.
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Auth Models
// =============================================================================

/// Request to register a new account.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Login email; must not already be registered.
    pub email: String,
    /// Plaintext password; stored only as a salted hash.
    pub password: String,
}

/// Request to log in.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response carrying the session token.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    /// Signed session token (HS256 JWT).
    pub token: String,
}

// =============================================================================
// Generic Acknowledgement
// =============================================================================

/// `{success, message}` acknowledgement used by the write endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    /// Successful acknowledgement with the given message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Body of a supply update response.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateResponse {
    pub message: String,
}

/// Result of a supply delete, reporting how many records were removed.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// Number of records removed (0 or 1).
    pub deleted_count: u64,
}

// =============================================================================
// Donation Report
// =============================================================================

/// Body of `GET /api/auth/donate`: monthly totals plus the raw records.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationSummary {
    /// Summed donation amounts keyed by `"<MonthName> <Year>"`, scoped to
    /// the rolling three-month window.
    pub monthly_data: std::collections::BTreeMap<String, f64>,
    /// Every stored donation record, unfiltered.
    pub data: Vec<StoredDonation>,
}
