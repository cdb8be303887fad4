// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Credential verification and session token issuance for the relief goods
//! API.
//!
//! ## Auth Flow
//!
//! 1. Client registers with name/email/password; the password is stored as
//!    an argon2 hash with a random per-call salt, never as plaintext.
//! 2. Client logs in with email/password; a missing account and a wrong
//!    password are deliberately indistinguishable from the outside.
//! 3. On success the server issues an HS256 JWT carrying the account email
//!    and an expiry of issue time plus the configured TTL.
//!
//! Tokens are stateless: validity is checked from the signing secret alone,
//! and an issued token stays valid until its embedded expiry. No endpoint
//! currently requires a token; issuance exists for the clients that do
//! their own gating.

pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use error::AuthError;
pub use service::Authenticator;
pub use token::{SessionClaims, TokenIssuer};
