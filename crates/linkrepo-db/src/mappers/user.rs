//! User model -> entity mapper

use linkrepo_core::entities::User;
use linkrepo_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            phone_number: model.phone_number,
            created_at: model.created_at,
        }
    }
}
