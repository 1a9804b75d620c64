//! Directory entity - a named, user-owned group of links

use chrono::{DateTime, Utc};

use crate::value_objects::{DirectoryId, UserId};

/// Directory owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub id: DirectoryId,
    pub user_id: UserId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Directory {
    /// Create a new Directory
    pub fn new(id: DirectoryId, user_id: UserId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the directory belongs to the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}
