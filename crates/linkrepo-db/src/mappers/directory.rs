//! Directory model -> entity mapper

use linkrepo_core::entities::Directory;
use linkrepo_core::value_objects::{DirectoryId, UserId};

use crate::models::DirectoryModel;

/// Convert DirectoryModel to Directory entity
impl From<DirectoryModel> for Directory {
    fn from(model: DirectoryModel) -> Self {
        Directory {
            id: DirectoryId::new(model.id),
            user_id: UserId::new(model.id_user),
            title: model.title,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
