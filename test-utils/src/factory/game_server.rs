//! Game server factory for creating test game server entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test game servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let server = GameServerFactory::new(&db)
///     .game("Minecraft")
///     .status("offline")
///     .build()
///     .await?;
/// ```
pub struct GameServerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    game: String,
    description: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> GameServerFactory<'a> {
    /// Creates a new GameServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {id}"`
    /// - game: `"Minecraft"`
    /// - description: `None`
    /// - status: `"online"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Server {}", id),
            game: "Minecraft".to_string(),
            description: None,
            status: "online".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn game(mut self, game: impl Into<String>) -> Self {
        self.game = game.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the raw status column, allowing values outside `online`/`offline`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the game server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game_server::Model)` - Created game server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game_server::Model, DbErr> {
        entity::game_server::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            game: ActiveValue::Set(self.game),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an online game server with default values.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::game_server::Model, DbErr> {
    GameServerFactory::new(db).build().await
}
