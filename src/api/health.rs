// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;
use chrono::Utc;

use crate::models::ServerStatus;

/// Server status handler.
///
/// Always returns 200 while the process is running; used by the frontend
/// and by liveness probes.
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    responses((status = 200, description = "Service is alive", body = ServerStatus))
)]
pub async fn server_status() -> Json<ServerStatus> {
    Json(ServerStatus {
        message: "Server is running smoothly".to_string(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn status_reports_running_with_timestamp() {
        let before = Utc::now();
        let Json(status) = server_status().await;

        assert_eq!(status.message, "Server is running smoothly");
        assert!(status.timestamp >= before);
        assert!(status.timestamp <= Utc::now());
    }
}
