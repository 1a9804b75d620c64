//! Link entity - a titled URL stored inside one directory

use chrono::{DateTime, Utc};

use crate::value_objects::{DirectoryId, LinkId};

/// Link stored in a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub directory_id: DirectoryId,
    pub url: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Create a new Link
    pub fn new(id: LinkId, directory_id: DirectoryId, url: String, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            directory_id,
            url,
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial change, returning `true` if any field was touched
    pub fn apply(&mut self, change: &LinkChange) -> bool {
        if change.is_empty() {
            return false;
        }
        if let Some(url) = &change.url {
            self.url.clone_from(url);
        }
        if let Some(title) = &change.title {
            self.title.clone_from(title);
        }
        self.updated_at = Utc::now();
        true
    }
}

/// A link that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub url: String,
    pub title: String,
}

impl NewLink {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Partial update of a link
///
/// `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkChange {
    pub url: Option<String>,
    pub title: Option<String>,
}

impl LinkChange {
    /// Check whether the change touches no field at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.title.is_none()
    }
}
