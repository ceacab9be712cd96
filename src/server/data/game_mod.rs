//! Mod data repository for database operations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::game_mod::{CreateGameModParam, GameMod};

/// Repository providing database operations for game server mods.
pub struct GameModRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameModRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every mod of every server in storage order.
    ///
    /// No ordering or filtering is applied; mods are grouped onto their servers in memory.
    pub async fn get_all(&self) -> Result<Vec<GameMod>, DbErr> {
        let entities = entity::prelude::GameMod::find().all(self.db).await?;

        Ok(entities.into_iter().map(GameMod::from_entity).collect())
    }

    /// Inserts a new mod.
    ///
    /// # Returns
    /// - `Ok(GameMod)` - The inserted mod
    /// - `Err(DbErr)` - Database error, including a foreign key violation when `server_id`
    ///   references no game server
    pub async fn create(&self, param: CreateGameModParam) -> Result<GameMod, DbErr> {
        let entity = entity::game_mod::ActiveModel {
            id: ActiveValue::NotSet,
            server_id: ActiveValue::Set(param.server_id),
            name: ActiveValue::Set(param.name),
            url: ActiveValue::Set(param.url),
        }
        .insert(self.db)
        .await?;

        Ok(GameMod::from_entity(entity))
    }

    /// Deletes a mod by id. A missing id removes nothing and succeeds.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GameMod::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
