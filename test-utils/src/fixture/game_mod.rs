//! Fixture for mod test data.

use entity::game_mod;

/// Creates a mod entity model belonging to server 1.
pub fn entity() -> game_mod::Model {
    entity_builder().build()
}

/// Creates a customizable mod entity builder.
pub fn entity_builder() -> GameModEntityBuilder {
    GameModEntityBuilder::default()
}

/// Builder for mod entity models.
pub struct GameModEntityBuilder {
    id: i32,
    server_id: i32,
    name: String,
    url: String,
}

impl Default for GameModEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            server_id: 1,
            name: "Create".to_string(),
            url: "https://mods.example.com/create".to_string(),
        }
    }
}

impl GameModEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn server_id(mut self, server_id: i32) -> Self {
        self.server_id = server_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> game_mod::Model {
        game_mod::Model {
            id: self.id,
            server_id: self.server_id,
            name: self.name,
            url: self.url,
        }
    }
}
