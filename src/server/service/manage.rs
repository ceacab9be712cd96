//! Admin mutation service.
//!
//! Inserts and deletes websites, game servers and mods on behalf of the admin back
//! office. Every successful mutation invalidates the dashboard.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        game_mod::GameModRepository, game_server::GameServerRepository,
        website::WebsiteRepository,
    },
    error::AppError,
    model::manage::{DeleteEntity, EntityKind, NewEntity},
    service::cache::{CacheEvents, CacheKey},
};

pub struct ManageService<'a> {
    db: &'a DatabaseConnection,
    events: &'a CacheEvents,
}

impl<'a> ManageService<'a> {
    /// Creates a new ManageService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `events` - Bus notified after each successful mutation
    pub fn new(db: &'a DatabaseConnection, events: &'a CacheEvents) -> Self {
        Self { db, events }
    }

    /// Inserts a new website, game server or mod.
    ///
    /// # Arguments
    /// - `entity` - Validated insert for one entity kind
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the inserted row
    /// - `Err(AppError::DbErr)` - Insert failed, including a mod referencing no server
    pub async fn add(&self, entity: NewEntity) -> Result<i32, AppError> {
        let kind = entity.kind();

        let id = match entity {
            NewEntity::Website(param) => WebsiteRepository::new(self.db).create(param).await?.id,
            NewEntity::Server(param) => {
                GameServerRepository::new(self.db).create(param).await?.id
            }
            NewEntity::Mod(param) => GameModRepository::new(self.db).create(param).await?.id,
        };

        tracing::info!("Added {} {}", kind, id);
        self.events.emit(CacheKey::Dashboard);

        Ok(id)
    }

    /// Deletes a website, game server or mod by id.
    ///
    /// Deleting a game server also removes its mods. An id that does not exist is not an
    /// error, and the dashboard is invalidated either way.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows of the selected kind removed
    /// - `Err(AppError::DbErr)` - Delete failed
    pub async fn delete(&self, target: DeleteEntity) -> Result<u64, AppError> {
        let removed = match target.kind {
            EntityKind::Website => WebsiteRepository::new(self.db).delete(target.id).await?,
            EntityKind::Server => GameServerRepository::new(self.db).delete(target.id).await?,
            EntityKind::Mod => GameModRepository::new(self.db).delete(target.id).await?,
        };

        if removed == 0 {
            tracing::debug!("No {} with id {} to delete", target.kind, target.id);
        } else {
            tracing::info!("Deleted {} {}", target.kind, target.id);
        }
        self.events.emit(CacheKey::Dashboard);

        Ok(removed)
    }
}
