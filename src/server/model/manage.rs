//! Entity kinds and typed mutations for the admin back office.
//!
//! The admin API selects a table with a free-form `type` string. It is converted once, at
//! the controller boundary, into the closed [`EntityKind`] and [`NewEntity`] types so the
//! service layer matches exhaustively instead of comparing strings.

use serde_json::Value;

use crate::{
    model::manage::{
        AddEntityDto, CreateGameServerDto, CreateModDto, CreateWebsiteDto, DeleteEntityDto,
    },
    server::{
        error::AppError,
        model::{
            game_mod::CreateGameModParam, game_server::CreateGameServerParam,
            website::CreateWebsiteParam,
        },
    },
};

/// Which table a mutation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Website,
    Server,
    Mod,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Server => "server",
            Self::Mod => "mod",
        }
    }
}

impl TryFrom<&str> for EntityKind {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "website" => Ok(Self::Website),
            "server" => Ok(Self::Server),
            "mod" => Ok(Self::Mod),
            _ => Err(AppError::BadRequest("Invalid type".to_string())),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated insert carrying only the fields valid for its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NewEntity {
    Website(CreateWebsiteParam),
    Server(CreateGameServerParam),
    Mod(CreateGameModParam),
}

impl NewEntity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Website(_) => EntityKind::Website,
            Self::Server(_) => EntityKind::Server,
            Self::Mod(_) => EntityKind::Mod,
        }
    }
}

impl TryFrom<AddEntityDto> for NewEntity {
    type Error = AppError;

    /// Validates the kind first, then the fields of `data` for that kind.
    ///
    /// # Returns
    /// - `Ok(NewEntity)` - A complete insert for the selected kind
    /// - `Err(AppError::BadRequest)` - Unknown kind, malformed data or missing fields
    fn try_from(dto: AddEntityDto) -> Result<Self, Self::Error> {
        let kind = EntityKind::try_from(dto.kind.as_str())?;

        let entity = match kind {
            EntityKind::Website => {
                Self::Website(CreateWebsiteParam::try_from(parse_data::<CreateWebsiteDto>(
                    dto.data,
                )?)?)
            }
            EntityKind::Server => Self::Server(CreateGameServerParam::try_from(parse_data::<
                CreateGameServerDto,
            >(
                dto.data
            )?)?),
            EntityKind::Mod => {
                Self::Mod(CreateGameModParam::try_from(parse_data::<CreateModDto>(dto.data)?)?)
            }
        };

        Ok(entity)
    }
}

/// A validated delete by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteEntity {
    pub kind: EntityKind,
    pub id: i32,
}

impl TryFrom<DeleteEntityDto> for DeleteEntity {
    type Error = AppError;

    fn try_from(dto: DeleteEntityDto) -> Result<Self, Self::Error> {
        let kind = EntityKind::try_from(dto.kind.as_str())?;

        let Some(id) = dto.id else {
            return Err(AppError::BadRequest("Missing required fields".to_string()));
        };
        let id = id
            .as_id()
            .ok_or_else(|| AppError::BadRequest("Invalid id".to_string()))?;

        Ok(Self { kind, id })
    }
}

/// Deserializes the `data` object of an add request, treating a missing object as empty.
fn parse_data<T: serde::de::DeserializeOwned>(data: Value) -> Result<T, AppError> {
    let data = match data {
        Value::Null => Value::Object(Default::default()),
        data => data,
    };

    serde_json::from_value(data).map_err(|e| AppError::BadRequest(format!("Invalid data: {}", e)))
}
