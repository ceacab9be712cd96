use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether a hosted game server is currently reachable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Online,
    Offline,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl std::str::FromStr for ServerStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "online" => Ok(Self::Online),
            "offline" => Ok(Self::Offline),
            other => Err(other.to_string()),
        }
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct WebsiteDto {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ModDto {
    pub id: i32,
    pub server_id: i32,
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct GameServerDto {
    pub id: i32,
    pub name: String,
    pub game: String,
    pub description: Option<String>,
    pub status: ServerStatus,
    pub created_at: DateTime<Utc>,
    /// Mods belonging to this server, in the order the store returned them.
    pub mods: Vec<ModDto>,
}

/// Combined payload rendered by the public dashboard and the admin page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DashboardDto {
    pub websites: Vec<WebsiteDto>,
    pub servers: Vec<GameServerDto>,
}
