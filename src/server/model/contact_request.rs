//! Domain & parameter models for contact form submissions.

use chrono::{DateTime, Utc};

use crate::{
    model::contact::{CreateContactRequestDto, RequestType},
    server::{error::AppError, util::parse::non_blank},
};

/// A stored contact request. Rows are never updated after insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRequest {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub request_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactRequest {
    pub fn from_entity(entity: entity::contact_request::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            request_type: entity.request_type,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}

/// A contact form submission before any validation.
///
/// Captcha values are already reduced to integers; `None` means the value was missing or
/// not numeric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub request_type: Option<String>,
    pub message: Option<String>,
    pub captcha_answer: Option<i64>,
    pub captcha_expected: Option<i64>,
}

impl From<CreateContactRequestDto> for ContactSubmission {
    fn from(dto: CreateContactRequestDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            request_type: dto.request_type,
            message: dto.message,
            captcha_answer: dto.captcha_answer.and_then(|value| value.as_i64()),
            captcha_expected: dto.captcha_correct.and_then(|value| value.as_i64()),
        }
    }
}

/// Parameters for inserting a contact request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateContactRequestParam {
    pub name: String,
    pub email: String,
    pub request_type: RequestType,
    pub message: String,
}

impl TryFrom<ContactSubmission> for CreateContactRequestParam {
    type Error = AppError;

    /// Checks the text fields of a submission. The captcha is not looked at here.
    ///
    /// # Returns
    /// - `Ok(CreateContactRequestParam)` - All fields present and the request type known
    /// - `Err(AppError::BadRequest("Missing required fields"))` - A field is missing or blank
    /// - `Err(AppError::BadRequest("Invalid request type"))` - Unknown request type
    fn try_from(submission: ContactSubmission) -> Result<Self, Self::Error> {
        let (Some(name), Some(email), Some(request_type), Some(message)) = (
            non_blank(submission.name),
            non_blank(submission.email),
            non_blank(submission.request_type),
            non_blank(submission.message),
        ) else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        let request_type = request_type
            .parse::<RequestType>()
            .map_err(|_| AppError::BadRequest("Invalid request type".to_string()))?;

        Ok(Self {
            name,
            email,
            request_type,
            message,
        })
    }
}
