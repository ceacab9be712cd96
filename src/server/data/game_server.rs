//! Game server data repository for database operations.
//!
//! Provides the `GameServerRepository` for listing, creating and deleting game servers.
//! Deleting a server removes its mods through the `ON DELETE CASCADE` foreign key on the
//! `mods` table.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::game_server::{CreateGameServerParam, GameServer},
};

pub struct GameServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every game server, newest first (ties broken by id descending).
    ///
    /// # Returns
    /// - `Ok(Vec<GameServer>)` - All game servers ordered by creation time descending
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored status is neither `online` nor `offline`
    pub async fn get_all(&self) -> Result<Vec<GameServer>, AppError> {
        let entities = entity::prelude::GameServer::find()
            .order_by_desc(entity::game_server::Column::CreatedAt)
            .order_by_desc(entity::game_server::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(GameServer::from_entity)
            .collect::<Result<Vec<_>, _>>()
    }

    /// Inserts a new game server stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(GameServer)` - The inserted game server
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreateGameServerParam) -> Result<GameServer, AppError> {
        let entity = entity::game_server::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            game: ActiveValue::Set(param.game),
            description: ActiveValue::Set(param.description),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        GameServer::from_entity(entity)
    }

    /// Deletes a game server and, through the foreign key, its mods.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of servers removed, 0 when the id did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GameServer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
