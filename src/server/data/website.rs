//! Website data repository for database operations.
//!
//! This module provides the `WebsiteRepository` for listing, creating and deleting the
//! websites shown on the dashboard. Entity models are converted to domain models at the
//! repository boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::website::{CreateWebsiteParam, Website};

/// Repository providing database operations for hosted websites.
pub struct WebsiteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebsiteRepository<'a> {
    /// Creates a new WebsiteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `WebsiteRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every website, newest first.
    ///
    /// Rows sharing a `created_at` timestamp are ordered by id descending so the most
    /// recently inserted row still comes first.
    ///
    /// # Returns
    /// - `Ok(Vec<Website>)` - All websites ordered by creation time descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Website>, DbErr> {
        let entities = entity::prelude::Website::find()
            .order_by_desc(entity::website::Column::CreatedAt)
            .order_by_desc(entity::website::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Website::from_entity).collect())
    }

    /// Inserts a new website stamped with the current time.
    ///
    /// # Arguments
    /// - `param` - Validated website fields
    ///
    /// # Returns
    /// - `Ok(Website)` - The inserted website with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateWebsiteParam) -> Result<Website, DbErr> {
        let entity = entity::website::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            url: ActiveValue::Set(param.url),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Website::from_entity(entity))
    }

    /// Deletes a website by id.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed, 0 or 1
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Website::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
