//! Domain & parameter models for hosted websites.

use chrono::{DateTime, Utc};

use crate::{
    model::{dashboard::WebsiteDto, manage::CreateWebsiteDto},
    server::{error::AppError, util::parse::non_blank},
};

/// A website hosted by the community.
#[derive(Debug, Clone, PartialEq)]
pub struct Website {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Website {
    /// Converts an entity model to the website domain model.
    pub fn from_entity(entity: entity::website::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            url: entity.url,
            description: entity.description,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> WebsiteDto {
        WebsiteDto {
            id: self.id,
            name: self.name,
            url: self.url,
            description: self.description,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a new website.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateWebsiteParam {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
}

impl TryFrom<CreateWebsiteDto> for CreateWebsiteParam {
    type Error = AppError;

    /// Requires a name and url; a blank description is stored as `NULL`.
    fn try_from(dto: CreateWebsiteDto) -> Result<Self, Self::Error> {
        let (Some(name), Some(url)) = (non_blank(dto.name), non_blank(dto.url)) else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        Ok(Self {
            name,
            url,
            description: non_blank(dto.description),
        })
    }
}
