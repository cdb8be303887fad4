// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with a process-wide secret loaded once at
//! startup. The only claims are the account email, issued-at, and expiry;
//! no roles or other attributes are embedded.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Account email the token was issued for
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Issues and verifies session tokens with a process-wide secret.
///
/// Constructed once at startup from configuration and shared through
/// [`crate::state::AppState`]; the secret and TTL are not reloadable.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a TokenIssuer from a shared secret and a token lifetime.
    pub fn new(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Issue a signed token for an account email.
    ///
    /// The expiry is `now` plus the configured TTL.
    pub fn issue(&self, email: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = SessionClaims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(AuthError::TokenSigning)
    }

    /// Verify a token and return its claims.
    ///
    /// Enforces the signature and the embedded expiry (with clock skew
    /// leeway); an expired token is reported distinctly.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = CLOCK_SKEW_LEEWAY;
        validation.validate_aud = false;

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }
}
