// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ApiError,
    models::{Acknowledgement, DeleteResponse, UpdateResponse},
    state::AppState,
    storage::{StorageError, StoredSupply, SupplyFields, SupplyPatch, SupplyRepository},
};

#[utoipa::path(
    get,
    path = "/api/auth/all-supplies",
    tag = "Supplies",
    responses((status = 200, body = [StoredSupply]))
)]
pub async fn list_supplies(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredSupply>>, ApiError> {
    let repo = SupplyRepository::new(&state.storage);
    Ok(Json(repo.list_all()?))
}

#[utoipa::path(
    post,
    path = "/api/auth/all-supplies",
    request_body = SupplyFields,
    tag = "Supplies",
    responses((status = 200, body = Acknowledgement))
)]
pub async fn create_supply(
    State(state): State<AppState>,
    Json(fields): Json<SupplyFields>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let repo = SupplyRepository::new(&state.storage);
    repo.create(fields)?;

    Ok(Json(Acknowledgement::ok("Supply item added successfully")))
}

#[utoipa::path(
    put,
    path = "/api/auth/all-supplies/{supply_id}",
    params(("supply_id" = String, Path, description = "Identifier of the supply item to update")),
    request_body = SupplyPatch,
    tag = "Supplies",
    responses(
        (status = 200, description = "Supply item updated", body = UpdateResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No supply item with this identifier"),
    )
)]
pub async fn update_supply(
    Path(supply_id): Path<String>,
    State(state): State<AppState>,
    Json(patch): Json<SupplyPatch>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let repo = SupplyRepository::new(&state.storage);

    repo.update(&supply_id, &patch).map_err(|e| match e {
        StorageError::NotFound(_) => ApiError::not_found("Supply item not found"),
        StorageError::InvalidId(_) => ApiError::bad_request("Invalid supply item id"),
        other => ApiError::from(other),
    })?;

    Ok(Json(UpdateResponse {
        message: "Supply item updated successfully".to_string(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/auth/all-supplies/{supply_id}",
    params(("supply_id" = String, Path, description = "Identifier of the supply item to delete")),
    tag = "Supplies",
    responses(
        (status = 200, description = "Delete result", body = DeleteResponse),
        (status = 400, description = "Malformed identifier"),
    )
)]
pub async fn delete_supply(
    Path(supply_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let repo = SupplyRepository::new(&state.storage);

    let deleted_count = repo.delete(&supply_id).map_err(|e| match e {
        StorageError::InvalidId(_) => ApiError::bad_request("Invalid supply item id"),
        other => ApiError::from(other),
    })?;

    Ok(Json(DeleteResponse { deleted_count }))
}
