//! Domain & parameter models for game server mods.

use crate::{
    model::{dashboard::ModDto, manage::CreateModDto},
    server::{error::AppError, util::parse::non_blank},
};

/// A mod installed on a game server.
#[derive(Debug, Clone, PartialEq)]
pub struct GameMod {
    pub id: i32,
    pub server_id: i32,
    pub name: String,
    pub url: String,
}

impl GameMod {
    pub fn from_entity(entity: entity::game_mod::Model) -> Self {
        Self {
            id: entity.id,
            server_id: entity.server_id,
            name: entity.name,
            url: entity.url,
        }
    }

    pub fn into_dto(self) -> ModDto {
        ModDto {
            id: self.id,
            server_id: self.server_id,
            name: self.name,
            url: self.url,
        }
    }
}

/// Parameters for creating a new mod.
///
/// `server_id` is not checked against existing servers here; the store's foreign key
/// decides whether the insert succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGameModParam {
    pub server_id: i32,
    pub name: String,
    pub url: String,
}

impl TryFrom<CreateModDto> for CreateGameModParam {
    type Error = AppError;

    fn try_from(dto: CreateModDto) -> Result<Self, Self::Error> {
        let (Some(server_id), Some(name), Some(url)) =
            (dto.server_id, non_blank(dto.name), non_blank(dto.url))
        else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };

        let server_id = server_id
            .as_id()
            .ok_or_else(|| AppError::BadRequest("Invalid server_id".to_string()))?;

        Ok(Self {
            server_id,
            name,
            url,
        })
    }
}
