// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        Acknowledgement, DeleteResponse, DonationSummary, LoginRequest, LoginResponse,
        RegisterRequest, ServerStatus, UpdateResponse,
    },
    state::AppState,
    storage::{DonationStatus, StoredComment, StoredDonation, StoredSupply, SupplyFields, SupplyPatch},
};

pub mod auth;
pub mod comments;
pub mod donations;
pub mod health;
pub mod supplies;

pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/all-supplies",
            get(supplies::list_supplies).post(supplies::create_supply),
        )
        .route(
            "/all-supplies/{supply_id}",
            put(supplies::update_supply).delete(supplies::delete_supply),
        )
        .route(
            "/donate",
            get(donations::donation_summary).post(donations::create_donation),
        )
        .route(
            "/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .with_state(state);

    Router::new()
        .route("/", get(health::server_status))
        .nest("/api/auth", auth_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::server_status,
        auth::register,
        auth::login,
        supplies::list_supplies,
        supplies::create_supply,
        supplies::update_supply,
        supplies::delete_supply,
        donations::donation_summary,
        donations::create_donation,
        comments::list_comments,
        comments::create_comment
    ),
    components(
        schemas(
            ServerStatus,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            Acknowledgement,
            UpdateResponse,
            DeleteResponse,
            DonationSummary,
            StoredSupply,
            SupplyFields,
            SupplyPatch,
            StoredDonation,
            DonationStatus,
            StoredComment
        )
    ),
    tags(
        (name = "Status", description = "Service status"),
        (name = "Auth", description = "Registration and login"),
        (name = "Supplies", description = "Relief supply items"),
        (name = "Donations", description = "Donation records and reporting"),
        (name = "Comments", description = "Visitor comments")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenIssuer;
    use crate::storage::{DocumentStorage, StoragePaths};

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let test_dir =
            std::env::temp_dir().join(format!("test-api-router-{}", uuid::Uuid::new_v4()));
        let mut storage = DocumentStorage::new(StoragePaths::new(&test_dir));
        storage.initialize().expect("Failed to initialize");
        let state = AppState::new(storage, TokenIssuer::new(b"test-secret", 3600));

        let app = router(state);
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();

        let _ = std::fs::remove_dir_all(&test_dir);
    }
}
