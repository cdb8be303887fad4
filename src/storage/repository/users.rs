// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User account repository (credential store).
//!
//! Each account is stored as a separate JSON file under `/data/users/`.
//! The stored password is an argon2 PHC string; plaintext never touches
//! storage. Email uniqueness is enforced here: `create` refuses a second
//! account with the same (case-sensitive) email.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{DocumentStorage, StorageError, StorageResult};

/// User account stored on the document filesystem.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct StoredUser {
    /// Unique account identifier (UUID)
    pub id: String,
    /// Display name supplied at registration
    pub name: String,
    /// Login email, unique across accounts
    pub email: String,
    /// Argon2 PHC-format password hash
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Repository for user account operations on document storage.
pub struct UserRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository.
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// Get a user account by ID.
    pub fn get(&self, user_id: &str) -> StorageResult<StoredUser> {
        let path = self.storage.paths().user(user_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("User {user_id}")));
        }
        self.storage.read_json(path)
    }

    /// Find a user account by exact email match.
    pub fn find_by_email(&self, email: &str) -> StorageResult<Option<StoredUser>> {
        let user_ids = self
            .storage
            .list_files(self.storage.paths().users_dir(), "json")?;

        for id in user_ids {
            let user = self.get(&id)?;
            if user.email == email {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    /// Create a new user account.
    ///
    /// Fails with `AlreadyExists` when an account with the same email is
    /// already stored.
    pub fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> StorageResult<StoredUser> {
        if self.find_by_email(email)?.is_some() {
            return Err(StorageError::AlreadyExists(format!("User {email}")));
        }

        let user = StoredUser {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };

        self.storage
            .write_json(self.storage.paths().user(&user.id), &user)?;
        Ok(user)
    }
}
