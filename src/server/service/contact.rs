//! Contact intake service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact_request::ContactRequestRepository,
    error::AppError,
    model::contact_request::{ContactRequest, ContactSubmission, CreateContactRequestParam},
    service::captcha,
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a contact form submission.
    ///
    /// The captcha is checked before any other field, so a wrong answer is reported as a
    /// captcha error even when fields are missing.
    ///
    /// # Returns
    /// - `Ok(ContactRequest)` - The stored request
    /// - `Err(AppError::BadRequest)` - Invalid captcha, missing fields or unknown request
    ///   type; nothing is stored
    /// - `Err(AppError::DbErr)` - Insert failed
    pub async fn submit(&self, submission: ContactSubmission) -> Result<ContactRequest, AppError> {
        captcha::verify(submission.captcha_answer, submission.captcha_expected)?;

        let param = CreateContactRequestParam::try_from(submission)?;
        let request = ContactRequestRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Received {} contact request {}",
            request.request_type,
            request.id
        );

        Ok(request)
    }
}
