//! Domain & parameter models for game servers.

use chrono::{DateTime, Utc};

use crate::{
    model::{dashboard::ServerStatus, manage::CreateGameServerDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::non_blank,
    },
};

/// A game server hosted by the community.
#[derive(Debug, Clone, PartialEq)]
pub struct GameServer {
    pub id: i32,
    pub name: String,
    pub game: String,
    pub description: Option<String>,
    pub status: ServerStatus,
    pub created_at: DateTime<Utc>,
}

impl GameServer {
    /// Converts an entity model to the game server domain model
    ///
    /// # Returns
    /// - `Ok(GameServer)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownServerStatus))` - The stored status is neither
    ///   `online` nor `offline`
    pub fn from_entity(entity: entity::game_server::Model) -> Result<Self, AppError> {
        let status = entity.status.parse::<ServerStatus>().map_err(|status| {
            InternalError::UnknownServerStatus {
                id: entity.id,
                status,
            }
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            game: entity.game,
            description: entity.description,
            status,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for creating a new game server.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGameServerParam {
    pub name: String,
    pub game: String,
    pub description: Option<String>,
    pub status: ServerStatus,
}

impl TryFrom<CreateGameServerDto> for CreateGameServerParam {
    type Error = AppError;

    /// Requires name, game and a status of `online` or `offline`.
    fn try_from(dto: CreateGameServerDto) -> Result<Self, Self::Error> {
        let (Some(name), Some(game), Some(status)) = (
            non_blank(dto.name),
            non_blank(dto.game),
            non_blank(dto.status),
        ) else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        let status = status
            .to_lowercase()
            .parse::<ServerStatus>()
            .map_err(|_| AppError::BadRequest("Invalid status".to_string()))?;

        Ok(Self {
            name,
            game,
            description: non_blank(dto.description),
            status,
        })
    }
}
