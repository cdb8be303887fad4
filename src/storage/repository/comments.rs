// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Comment repository.
//!
//! Comments are append-only arbitrary payloads stamped with the server
//! clock. Each comment is stored as a separate JSON file under
//! `/data/comments/`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{DocumentStorage, StorageResult};

/// Comment stored on the document filesystem.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredComment {
    /// Unique comment identifier (UUID)
    pub id: String,
    /// Arbitrary comment payload from the client
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
    /// When the comment was recorded (server clock at insert)
    pub current_date: DateTime<Utc>,
}

/// Repository for comment operations on document storage.
pub struct CommentRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> CommentRepository<'a> {
    /// Create a new CommentRepository.
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// List all comments, in no defined order.
    pub fn list_all(&self) -> StorageResult<Vec<StoredComment>> {
        let comment_ids = self
            .storage
            .list_files(self.storage.paths().comments_dir(), "json")?;

        let mut comments = Vec::new();
        for id in comment_ids {
            comments.push(self.storage.read_json(self.storage.paths().comment(&id))?);
        }

        Ok(comments)
    }

    /// Record a new comment with the given payload and timestamp.
    pub fn create(
        &self,
        data: serde_json::Value,
        now: DateTime<Utc>,
    ) -> StorageResult<StoredComment> {
        let comment = StoredComment {
            id: uuid::Uuid::new_v4().to_string(),
            data,
            current_date: now,
        };

        self.storage
            .write_json(self.storage.paths().comment(&comment.id), &comment)?;
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DocumentStorage, StoragePaths};
    use serde_json::json;
    use std::env;
    use std::fs;

    fn test_storage() -> DocumentStorage {
        let test_dir = env::temp_dir().join(format!("test-comment-repo-{}", uuid::Uuid::new_v4()));
        let paths = StoragePaths::new(&test_dir);
        let mut storage = DocumentStorage::new(paths);
        storage.initialize().expect("Failed to initialize");
        storage
    }

    fn cleanup(storage: &DocumentStorage) {
        let _ = fs::remove_dir_all(storage.paths().root());
    }

    #[test]
    fn create_and_list_comments() {
        let storage = test_storage();
        let repo = CommentRepository::new(&storage);

        let now = Utc::now();
        let created = repo
            .create(json!({"text": "Thank you!", "author": "anonymous"}), now)
            .unwrap();
        assert_eq!(created.current_date, now);

        let all = repo.list_all().unwrap();
        assert_eq!(all, vec![created]);

        cleanup(&storage);
    }

    #[test]
    fn wire_names_follow_contract() {
        let storage = test_storage();
        let repo = CommentRepository::new(&storage);

        let comment = repo.create(json!("plain string payload"), Utc::now()).unwrap();
        let value = serde_json::to_value(&comment).unwrap();
        assert!(value.get("currentDate").is_some());
        assert_eq!(value["data"], json!("plain string payload"));

        cleanup(&storage);
    }
}
