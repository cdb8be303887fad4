// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Registration and login over the credential store.

use chrono::{DateTime, Utc};

use crate::storage::{DocumentStorage, UserRepository};

use super::{password, AuthError, TokenIssuer};

/// Validates credentials against the credential store and issues session
/// tokens.
///
/// Constructed per request from the shared storage handle and token issuer.
pub struct Authenticator<'a> {
    users: UserRepository<'a>,
    tokens: &'a TokenIssuer,
}

impl<'a> Authenticator<'a> {
    /// Create a new Authenticator.
    pub fn new(storage: &'a DocumentStorage, tokens: &'a TokenIssuer) -> Self {
        Self {
            users: UserRepository::new(storage),
            tokens,
        }
    }

    /// Register a new account.
    ///
    /// Fails with [`AuthError::AlreadyExists`] when an account with the same
    /// email is already stored. On success a subsequent login with the same
    /// credentials succeeds.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        let password_hash = password::hash_password(password)?;
        self.users.create(name, email, &password_hash)?;
        Ok(())
    }

    /// Log in with email and password, returning a signed session token.
    ///
    /// An unknown email and a wrong password produce the same
    /// [`AuthError::InvalidCredentials`]: one internal check, one external
    /// variant, so neither path leaks which part failed.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let credentials_ok = match self.users.find_by_email(email)? {
            Some(user) => password::verify_password(&user.password_hash, password),
            None => false,
        };

        if !credentials_ok {
            return Err(AuthError::InvalidCredentials);
        }

        self.tokens.issue(email, now)
    }
}
