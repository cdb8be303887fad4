// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! Client-triggered conditions (`AlreadyExists`, `InvalidCredentials`) map
//! to 4xx responses with the exact bodies the original wire contract fixes.
//! Everything else is an internal fault: logged server-side, reported as a
//! generic 500 with no detail leaked.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::storage::StorageError;

/// Authentication error type.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Registration conflict: an account with this email already exists
    #[error("User already exists")]
    AlreadyExists,

    /// Login failure; covers both unknown email and wrong password so the
    /// two are indistinguishable from the outside
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,

    /// Token signature or structure is invalid
    #[error("Token is invalid")]
    InvalidToken,

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    /// Token signing failed
    #[error("Token signing failed: {0}")]
    TokenSigning(jsonwebtoken::errors::Error),

    /// Underlying storage failure
    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for AuthError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::AlreadyExists(_) => AuthError::AlreadyExists,
            other => AuthError::Storage(other),
        }
    }
}

#[derive(Serialize)]
struct AuthErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    message: String,
}

impl AuthError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::AlreadyExists => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::Hashing(_) | AuthError::TokenSigning(_) | AuthError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            // The registration conflict body carries the success flag the
            // original contract exposes.
            AuthError::AlreadyExists => AuthErrorBody {
                success: Some(false),
                message: self.to_string(),
            },
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::InvalidToken => AuthErrorBody {
                success: None,
                message: self.to_string(),
            },
            AuthError::Hashing(_) | AuthError::TokenSigning(_) | AuthError::Storage(_) => {
                tracing::error!("authentication fault: {self}");
                AuthErrorBody {
                    success: None,
                    message: "Internal server error".to_string(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn already_exists_returns_contract_body() {
        let response = AuthError::AlreadyExists.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User already exists");
    }

    #[tokio::test]
    async fn invalid_credentials_returns_401_without_detail() {
        let response = AuthError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["message"], "Invalid email or password");
        assert!(body.get("success").is_none());
    }

    #[tokio::test]
    async fn storage_fault_is_generic_500() {
        let err = AuthError::Storage(StorageError::NotInitialized);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["message"], "Internal server error");
    }

    #[test]
    fn storage_conflict_maps_to_already_exists() {
        let err: AuthError = StorageError::AlreadyExists("User a@b.c".to_string()).into();
        assert!(matches!(err, AuthError::AlreadyExists));
    }
}
