// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Supply item repository.
//!
//! Supply items are the relief goods published on the site. Each item is
//! stored as a separate JSON file under `/data/supplies/`. All payload
//! fields are optional and stored verbatim; this layer applies no
//! validation beyond identifier well-formedness.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::super::{DocumentStorage, StorageError, StorageResult};

/// Supply item stored on the document filesystem.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StoredSupply {
    /// Unique supply identifier (UUID)
    pub id: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Supply category (e.g. "Food", "Medical")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Display title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Quantity or amount; clients send numbers or strings, stored as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub amount: Option<serde_json::Value>,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload fields accepted when creating a supply item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SupplyFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub amount: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update for a supply item.
///
/// Only the fields present in the patch are overwritten; absent fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SupplyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub amount: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SupplyPatch {
    /// Overwrite the supplied fields on an existing item.
    fn apply(&self, supply: &mut StoredSupply) {
        if let Some(image) = &self.image {
            supply.image = Some(image.clone());
        }
        if let Some(category) = &self.category {
            supply.category = Some(category.clone());
        }
        if let Some(title) = &self.title {
            supply.title = Some(title.clone());
        }
        if let Some(amount) = &self.amount {
            supply.amount = Some(amount.clone());
        }
        if let Some(description) = &self.description {
            supply.description = Some(description.clone());
        }
    }
}

/// Validate that an identifier is a well-formed UUID before touching storage.
fn check_id(supply_id: &str) -> StorageResult<()> {
    uuid::Uuid::parse_str(supply_id)
        .map(|_| ())
        .map_err(|_| StorageError::InvalidId(supply_id.to_string()))
}

/// Repository for supply item operations on document storage.
pub struct SupplyRepository<'a> {
    storage: &'a DocumentStorage,
}

impl<'a> SupplyRepository<'a> {
    /// Create a new SupplyRepository.
    pub fn new(storage: &'a DocumentStorage) -> Self {
        Self { storage }
    }

    /// Check if a supply item exists.
    pub fn exists(&self, supply_id: &str) -> bool {
        self.storage.exists(self.storage.paths().supply(supply_id))
    }

    /// Get a supply item by ID.
    pub fn get(&self, supply_id: &str) -> StorageResult<StoredSupply> {
        let path = self.storage.paths().supply(supply_id);
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("Supply item {supply_id}")));
        }
        self.storage.read_json(path)
    }

    /// List all supply items, in no defined order.
    pub fn list_all(&self) -> StorageResult<Vec<StoredSupply>> {
        let supply_ids = self
            .storage
            .list_files(self.storage.paths().supplies_dir(), "json")?;

        let mut supplies = Vec::new();
        for id in supply_ids {
            supplies.push(self.get(&id)?);
        }

        Ok(supplies)
    }

    /// Create a new supply item from the given fields, verbatim.
    pub fn create(&self, fields: SupplyFields) -> StorageResult<StoredSupply> {
        let supply = StoredSupply {
            id: uuid::Uuid::new_v4().to_string(),
            image: fields.image,
            category: fields.category,
            title: fields.title,
            amount: fields.amount,
            description: fields.description,
        };

        self.storage
            .write_json(self.storage.paths().supply(&supply.id), &supply)?;
        Ok(supply)
    }

    /// Apply a partial update to an existing supply item.
    ///
    /// Fails with `InvalidId` when the identifier is not a well-formed UUID
    /// and `NotFound` when no item matches it.
    pub fn update(&self, supply_id: &str, patch: &SupplyPatch) -> StorageResult<StoredSupply> {
        check_id(supply_id)?;

        let mut supply = self.get(supply_id)?;
        patch.apply(&mut supply);

        self.storage
            .write_json(self.storage.paths().supply(supply_id), &supply)?;
        Ok(supply)
    }

    /// Delete a supply item, reporting how many records were removed (0 or 1).
    pub fn delete(&self, supply_id: &str) -> StorageResult<u64> {
        check_id(supply_id)?;

        if !self.exists(supply_id) {
            return Ok(0);
        }

        self.storage
            .delete(self.storage.paths().supply(supply_id))?;
        Ok(1)
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
        let test_dir = env::temp_dir().join(format!("test-supply-repo-{}", uuid::Uuid::new_v4()));
        let paths = StoragePaths::new(&test_dir);
        let mut storage = DocumentStorage::new(paths);
        storage.initialize().expect("Failed to initialize");
        storage
    }

    fn cleanup(storage: &DocumentStorage) {
        let _ = fs::remove_dir_all(storage.paths().root());
    }

    fn test_fields() -> SupplyFields {
        SupplyFields {
            image: Some("https://example.com/rice.png".to_string()),
            category: Some("Food".to_string()),
            title: Some("Rice bags".to_string()),
            amount: Some(json!(50)),
            description: Some("25kg bags".to_string()),
        }
    }

    #[test]
    fn create_and_list_supplies() {
        let storage = test_storage();
        let repo = SupplyRepository::new(&storage);

        let created = repo.create(test_fields()).unwrap();
        assert!(!created.id.is_empty());

        let all = repo.list_all().unwrap();
        assert_eq!(all, vec![created]);

        cleanup(&storage);
    }

    #[test]
    fn create_accepts_missing_fields() {
        let storage = test_storage();
        let repo = SupplyRepository::new(&storage);

        let created = repo.create(SupplyFields::default()).unwrap();
        let loaded = repo.get(&created.id).unwrap();
        assert!(loaded.title.is_none());
        assert!(loaded.amount.is_none());

        cleanup(&storage);
    }

    #[test]
    fn update_overwrites_only_provided_fields() {
        let storage = test_storage();
        let repo = SupplyRepository::new(&storage);

        let created = repo.create(test_fields()).unwrap();
        let patch = SupplyPatch {
            title: Some("Rice bags (large)".to_string()),
            amount: Some(json!("75")),
            ..Default::default()
        };

        let updated = repo.update(&created.id, &patch).unwrap();
        assert_eq!(updated.title.as_deref(), Some("Rice bags (large)"));
        assert_eq!(updated.amount, Some(json!("75")));
        // Untouched fields keep their stored values.
        assert_eq!(updated.category, created.category);
        assert_eq!(updated.image, created.image);
        assert_eq!(updated.description, created.description);

        cleanup(&storage);
    }

    #[test]
    fn update_missing_item_is_not_found() {
        let storage = test_storage();
        let repo = SupplyRepository::new(&storage);

        let missing = uuid::Uuid::new_v4().to_string();
        let result = repo.update(&missing, &SupplyPatch::default());
        assert!(matches!(result, Err(StorageError::NotFound(_))));

        cleanup(&storage);
    }

    #[test]
    fn update_malformed_id_is_invalid() {
        let storage = test_storage();
        let repo = SupplyRepository::new(&storage);

        let result = repo.update("not-a-uuid", &SupplyPatch::default());
        assert!(matches!(result, Err(StorageError::InvalidId(_))));

        cleanup(&storage);
    }

    #[test]
    fn delete_reports_removed_count() {
        let storage = test_storage();
        let repo = SupplyRepository::new(&storage);

        let created = repo.create(test_fields()).unwrap();
        assert_eq!(repo.delete(&created.id).unwrap(), 1);
        // Second delete finds nothing to remove.
        assert_eq!(repo.delete(&created.id).unwrap(), 0);

        let missing = uuid::Uuid::new_v4().to_string();
        assert_eq!(repo.delete(&missing).unwrap(), 0);

        cleanup(&storage);
    }
}
