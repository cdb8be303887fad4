// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and the startup
//! configuration loaded from them. Configuration is read once at startup
//! and is not reloadable at runtime.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DATA_DIR` | Root directory for document storage | `/data` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `5000` |
//! | `JWT_SECRET` | Session token signing secret | Required |
//! | `TOKEN_TTL_SECS` | Session token lifetime in seconds | `3600` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the document storage root.
pub const DATA_DIR_ENV: &str = "DATA_DIR";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the session token signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable name for the session token lifetime in seconds.
pub const TOKEN_TTL_ENV: &str = "TOKEN_TTL_SECS";

/// Environment variable name for the log format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Configuration error raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    Missing(&'static str),

    #[error("environment variable {name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Process-wide configuration, loaded from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Root directory for document storage.
    pub data_dir: String,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Session token signing secret.
    pub jwt_secret: String,
    /// Session token lifetime in seconds.
    pub token_ttl_secs: u64,
    /// `true` when logs should be emitted as JSON.
    pub json_logs: bool,
}

impl ServerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret =
            env::var(JWT_SECRET_ENV).map_err(|_| ConfigError::Missing(JWT_SECRET_ENV))?;

        let port = match env::var(PORT_ENV) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: PORT_ENV,
                value: raw,
            })?,
            Err(_) => 5000,
        };

        let token_ttl_secs = match env::var(TOKEN_TTL_ENV) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: TOKEN_TTL_ENV,
                value: raw,
            })?,
            Err(_) => 3600,
        };

        Ok(Self {
            data_dir: env::var(DATA_DIR_ENV).unwrap_or_else(|_| "/data".to_string()),
            host: env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            jwt_secret,
            token_ttl_secs,
            json_logs: env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json")),
        })
    }
}
