//! Contact request factory for creating test contact request entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contact requests.
pub struct ContactRequestFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    request_type: String,
    message: String,
}

impl<'a> ContactRequestFactory<'a> {
    /// Creates a new ContactRequestFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Visitor {id}"`
    /// - email: `"visitor-{id}@example.com"`
    /// - request_type: `"game_server"`
    /// - message: `"Please host a server"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Visitor {}", id),
            email: format!("visitor-{}@example.com", id),
            request_type: "game_server".to_string(),
            message: "Please host a server".to_string(),
        }
    }

    pub fn request_type(mut self, request_type: impl Into<String>) -> Self {
        self.request_type = request_type.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Builds and inserts the contact request entity into the database.
    pub async fn build(self) -> Result<entity::contact_request::Model, DbErr> {
        entity::contact_request::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            request_type: ActiveValue::Set(self.request_type),
            message: ActiveValue::Set(self.message),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a contact request with default values.
pub async fn create_contact_request(
    db: &DatabaseConnection,
) -> Result<entity::contact_request::Model, DbErr> {
    ContactRequestFactory::new(db).build().await
}
