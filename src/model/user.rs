use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The signed-in user as seen by the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    /// Discord user ID, serialized as a string to survive JavaScript number precision.
    pub discord_id: String,
    pub name: String,
    pub admin: bool,
}
