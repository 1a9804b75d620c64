//! User entity - a registered chat account

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// A user registered with the bot, identified by phone number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: UserId, phone_number: String) -> Self {
        Self {
            id,
            phone_number,
            created_at: Utc::now(),
        }
    }
}
