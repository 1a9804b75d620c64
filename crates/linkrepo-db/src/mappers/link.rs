//! Link model -> entity mapper

use linkrepo_core::entities::Link;
use linkrepo_core::value_objects::{DirectoryId, LinkId};

use crate::models::LinkModel;

/// Convert LinkModel to Link entity
impl From<LinkModel> for Link {
    fn from(model: LinkModel) -> Self {
        Link {
            id: LinkId::new(model.id),
            directory_id: DirectoryId::new(model.id_directory),
            url: model.url,
            title: model.title,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
