// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, Json};
use chrono::Utc;

use crate::{
    error::ApiError,
    models::Acknowledgement,
    state::AppState,
    storage::{CommentRepository, StoredComment},
};

#[utoipa::path(
    get,
    path = "/api/auth/comments",
    tag = "Comments",
    responses((status = 200, body = [StoredComment]))
)]
pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredComment>>, ApiError> {
    let repo = CommentRepository::new(&state.storage);
    Ok(Json(repo.list_all()?))
}

#[utoipa::path(
    post,
    path = "/api/auth/comments",
    tag = "Comments",
    responses((status = 200, body = Acknowledgement))
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Json(data): Json<serde_json::Value>,
) -> Result<Json<Acknowledgement>, ApiError> {
    let repo = CommentRepository::new(&state.storage);
    repo.create(data, Utc::now())?;

    Ok(Json(Acknowledgement::ok("Comment added successfully")))
}
