//! Contact request data repository.
//!
//! Contact requests are write-only from the application's point of view: the intake
//! service inserts one row per accepted submission and nothing reads them back.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::contact_request::{ContactRequest, CreateContactRequestParam};

pub struct ContactRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated contact request stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(ContactRequest)` - The stored request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateContactRequestParam) -> Result<ContactRequest, DbErr> {
        let entity = entity::contact_request::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            request_type: ActiveValue::Set(param.request_type.as_str().to_string()),
            message: ActiveValue::Set(param.message),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ContactRequest::from_entity(entity))
    }
}
