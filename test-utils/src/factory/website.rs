//! Website factory for creating test website entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test websites with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let website = WebsiteFactory::new(&db)
///     .name("Cuddle Wiki")
///     .url("https://wiki.example.com")
///     .build()
///     .await?;
/// ```
pub struct WebsiteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    url: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> WebsiteFactory<'a> {
    /// Creates a new WebsiteFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Website {id}"`
    /// - url: `"https://site-{id}.example.com"`
    /// - description: `Some("Test website description")`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Website {}", id),
            url: format!("https://site-{}.example.com", id),
            description: Some("Test website description".to_string()),
            created_at: Utc::now(),
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

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Overrides the creation timestamp, useful for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the website entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::website::Model)` - Created website entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::website::Model, DbErr> {
        entity::website::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            url: ActiveValue::Set(self.url),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a website with default values.
pub async fn create_website(db: &DatabaseConnection) -> Result<entity::website::Model, DbErr> {
    WebsiteFactory::new(db).build().await
}
