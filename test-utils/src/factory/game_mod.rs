//! Mod factory for creating test mod entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mods attached to a game server.
pub struct GameModFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: i32,
    name: String,
    url: String,
}

impl<'a> GameModFactory<'a> {
    /// Creates a new GameModFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Mod {id}"`
    /// - url: `"https://mods.example.com/{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `server_id` - ID of the game server the mod belongs to
    pub fn new(db: &'a DatabaseConnection, server_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            server_id,
            name: format!("Mod {}", id),
            url: format!("https://mods.example.com/{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builds and inserts the mod entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game_mod::Model)` - Created mod entity
    /// - `Err(DbErr)` - Database error during insert, including a dangling `server_id`
    pub async fn build(self) -> Result<entity::game_mod::Model, DbErr> {
        entity::game_mod::ActiveModel {
            id: ActiveValue::NotSet,
            server_id: ActiveValue::Set(self.server_id),
            name: ActiveValue::Set(self.name),
            url: ActiveValue::Set(self.url),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mod with default values for the given server.
pub async fn create_mod(
    db: &DatabaseConnection,
    server_id: i32,
) -> Result<entity::game_mod::Model, DbErr> {
    GameModFactory::new(db, server_id).build().await
}
