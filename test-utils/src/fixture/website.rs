//! Fixture for website test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::website;

/// Creates a website entity model with default values.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::website::entity();
/// assert_eq!(entity.name, "Cuddle Wiki");
/// ```
pub fn entity() -> website::Model {
    entity_builder().build()
}

/// Creates a customizable website entity builder.
pub fn entity_builder() -> WebsiteEntityBuilder {
    WebsiteEntityBuilder::default()
}

/// Builder for website entity models.
pub struct WebsiteEntityBuilder {
    id: i32,
    name: String,
    url: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl Default for WebsiteEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Cuddle Wiki".to_string(),
            url: "https://wiki.example.com".to_string(),
            description: Some("Community knowledge base".to_string()),
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        }
    }
}

impl WebsiteEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn build(self) -> website::Model {
        website::Model {
            id: self.id,
            name: self.name,
            url: self.url,
            description: self.description,
            created_at: self.created_at,
        }
    }
}
