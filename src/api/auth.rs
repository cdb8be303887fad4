// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::{
    auth::{AuthError, Authenticator},
    models::{Acknowledgement, LoginRequest, LoginResponse, RegisterRequest},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 201, description = "Account created", body = Acknowledgement),
        (status = 400, description = "Email already registered"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Acknowledgement>), AuthError> {
    let auth = Authenticator::new(&state.storage, &state.tokens);
    auth.register(&request.name, &request.email, &request.password)?;

    Ok((
        StatusCode::CREATED,
        Json(Acknowledgement::ok("User registered successfully")),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid email or password"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let auth = Authenticator::new(&state.storage, &state.tokens);
    let token = auth.login(&request.email, &request.password, Utc::now())?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
    }))
}
