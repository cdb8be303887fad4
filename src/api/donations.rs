// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    error::ApiError,
    models::{Acknowledgement, DonationSummary},
    reports,
    state::AppState,
    storage::DonationRepository,
};

/// Donation report: monthly totals over the rolling three-month window,
/// plus every stored record as raw data for the frontend charts.
#[utoipa::path(
    get,
    path = "/api/auth/donate",
    tag = "Donations",
    responses((status = 200, body = DonationSummary))
)]
pub async fn donation_summary(
    State(state): State<AppState>,
) -> Result<Json<DonationSummary>, ApiError> {
    let repo = DonationRepository::new(&state.storage);
    let data = repo.list_all()?;
    let monthly_data = reports::summarize_recent(&data, Utc::now());

    Ok(Json(DonationSummary { monthly_data, data }))
}

#[utoipa::path(
    post,
    path = "/api/auth/donate",
    tag = "Donations",
    responses((status = 200, body = Acknowledgement))
)]
pub async fn create_donation(
    State(state): State<AppState>,
    Json(donation_info): Json<serde_json::Value>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let repo = DonationRepository::new(&state.storage);
    repo.create(donation_info, Utc::now())?;

    Ok(Json(Acknowledgement::ok("Donation added successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenIssuer;
    use crate::storage::{DocumentStorage, DonationStatus, StoragePaths};
    use serde_json::json;
    use std::env;
    use std::fs;

    fn test_state() -> AppState {
        let test_dir = env::temp_dir().join(format!("test-api-donations-{}", uuid::Uuid::new_v4()));
        let mut storage = DocumentStorage::new(StoragePaths::new(&test_dir));
        storage.initialize().expect("Failed to initialize");
        AppState::new(storage, TokenIssuer::new(b"test-secret", 3600))
    }

    fn cleanup(state: &AppState) {
        let _ = fs::remove_dir_all(state.storage.paths().root());
    }

    #[tokio::test]
    async fn create_records_pending_donation() {
        let state = test_state();

        let Json(ack) = create_donation(
            State(state.clone()),
            Json(json!({"donatedField": {"amount": "100"}})),
        )
        .await
        .expect("donation creation succeeds");
        assert!(ack.success);

        let repo = DonationRepository::new(&state.storage);
        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, DonationStatus::Pending);

        cleanup(&state);
    }

    #[tokio::test]
    async fn summary_totals_fresh_donations_and_returns_raw_data() {
        let state = test_state();

        // Inserted with the server clock, so both land in the current month.
        create_donation(
            State(state.clone()),
            Json(json!({"donatedField": {"amount": "100"}})),
        )
        .await
        .expect("first donation succeeds");
        create_donation(
            State(state.clone()),
            Json(json!({"donatedField": {"amount": 50}})),
        )
        .await
        .expect("second donation succeeds");

        let Json(summary) = donation_summary(State(state.clone()))
            .await
            .expect("summary succeeds");

        assert_eq!(summary.data.len(), 2);
        assert_eq!(summary.monthly_data.len(), 1);
        let month_total = summary.monthly_data.values().next().unwrap();
        assert_eq!(*month_total, 150.0);

        cleanup(&state);
    }

    #[tokio::test]
    async fn old_donations_stay_in_raw_data_but_not_in_totals() {
        let state = test_state();

        // Backdate a record well outside the three-month window.
        let repo = DonationRepository::new(&state.storage);
        let long_ago = Utc::now() - chrono::Duration::days(365);
        repo.create(json!({"donatedField": {"amount": "999"}}), long_ago)
            .unwrap();
        repo.create(json!({"donatedField": {"amount": "25"}}), Utc::now())
            .unwrap();

        let Json(summary) = donation_summary(State(state.clone()))
            .await
            .expect("summary succeeds");

        assert_eq!(summary.data.len(), 2);
        assert_eq!(summary.monthly_data.len(), 1);
        assert_eq!(*summary.monthly_data.values().next().unwrap(), 25.0);

        cleanup(&state);
    }

    #[tokio::test]
    async fn summary_on_empty_store_is_empty() {
        let state = test_state();

        let Json(summary) = donation_summary(State(state.clone()))
            .await
            .expect("summary succeeds");

        assert!(summary.monthly_data.is_empty());
        assert!(summary.data.is_empty());

        cleanup(&state);
    }
}
