// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Path constants and utilities for the document storage layout.

use std::path::{Path, PathBuf};

/// Base directory for all persistent document collections.
pub const DATA_ROOT: &str = "/data";

/// Storage path utilities for the document filesystem.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new(DATA_ROOT)
    }
}

impl StoragePaths {
    /// Create a new StoragePaths with a custom root (useful for testing).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory for all persistent data.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // ========== User Paths ==========

    /// Directory containing all user accounts.
    pub fn users_dir(&self) -> PathBuf {
        self.root.join("users")
    }

    /// Path to a specific user account file.
    pub fn user(&self, user_id: &str) -> PathBuf {
        self.users_dir().join(format!("{user_id}.json"))
    }

    // ========== Supply Paths ==========

    /// Directory containing all supply items.
    pub fn supplies_dir(&self) -> PathBuf {
        self.root.join("supplies")
    }

    /// Path to a specific supply item file.
    pub fn supply(&self, supply_id: &str) -> PathBuf {
        self.supplies_dir().join(format!("{supply_id}.json"))
    }

    // ========== Donation Paths ==========

    /// Directory containing all donation records.
    pub fn donations_dir(&self) -> PathBuf {
        self.root.join("donations")
    }

    /// Path to a specific donation record file.
    pub fn donation(&self, donation_id: &str) -> PathBuf {
        self.donations_dir().join(format!("{donation_id}.json"))
    }

    // ========== Comment Paths ==========

    /// Directory containing all comments.
    pub fn comments_dir(&self) -> PathBuf {
        self.root.join("comments")
    }

    /// Path to a specific comment file.
    pub fn comment(&self, comment_id: &str) -> PathBuf {
        self.comments_dir().join(format!("{comment_id}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_use_data_root() {
        let paths = StoragePaths::default();
        assert_eq!(paths.root(), Path::new("/data"));
    }

    #[test]
    fn custom_root_for_testing() {
        let paths = StoragePaths::new("/tmp/test-data");
        assert_eq!(paths.root(), Path::new("/tmp/test-data"));
        assert_eq!(
            paths.user("u-123"),
            PathBuf::from("/tmp/test-data/users/u-123.json")
        );
    }

    #[test]
    fn collection_paths_are_correct() {
        let paths = StoragePaths::default();
        assert_eq!(paths.users_dir(), PathBuf::from("/data/users"));
        assert_eq!(paths.supplies_dir(), PathBuf::from("/data/supplies"));
        assert_eq!(paths.donations_dir(), PathBuf::from("/data/donations"));
        assert_eq!(paths.comments_dir(), PathBuf::from("/data/comments"));
        assert_eq!(paths.supply("s-1"), PathBuf::from("/data/supplies/s-1.json"));
        assert_eq!(
            paths.donation("d-1"),
            PathBuf::from("/data/donations/d-1.json")
        );
        assert_eq!(
            paths.comment("c-1"),
            PathBuf::from("/data/comments/c-1.json")
        );
    }
}
