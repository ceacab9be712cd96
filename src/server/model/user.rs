//! Signed-in user model kept in the session.

use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// User identity returned by the identity provider and stored in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
}

impl SessionUser {
    /// Converts the session user to a DTO for API responses.
    ///
    /// # Arguments
    /// - `admin_ids` - Discord IDs allowed into the admin back office
    pub fn into_dto(self, admin_ids: &[u64]) -> UserDto {
        UserDto {
            discord_id: self.discord_id.to_string(),
            admin: admin_ids.contains(&self.discord_id),
            name: self.name,
        }
    }
}
