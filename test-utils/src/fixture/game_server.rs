//! Fixture for game server test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::game_server;

/// Creates an online game server entity model with default values.
pub fn entity() -> game_server::Model {
    entity_builder().build()
}

/// Creates a customizable game server entity builder.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::game_server::entity_builder()
///     .id(7)
///     .status("offline")
///     .build();
/// ```
pub fn entity_builder() -> GameServerEntityBuilder {
    GameServerEntityBuilder::default()
}

/// Builder for game server entity models.
pub struct GameServerEntityBuilder {
    id: i32,
    name: String,
    game: String,
    description: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl Default for GameServerEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Cuddle Craft".to_string(),
            game: "Minecraft".to_string(),
            description: None,
            status: "online".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        }
    }
}

impl GameServerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn build(self) -> game_server::Model {
        game_server::Model {
            id: self.id,
            name: self.name,
            game: self.game,
            description: self.description,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
