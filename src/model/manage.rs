use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::LooseInteger;

/// Body of `POST /api/admin/manage`.
///
/// `type` selects the entity kind (`website`, `server` or `mod`); `data` carries the
/// fields for that kind and is validated once the kind is known.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AddEntityDto {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

/// Body of `DELETE /api/admin/manage`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DeleteEntityDto {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub id: Option<LooseInteger>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CreateWebsiteDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CreateGameServerDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `online` or `offline`.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CreateModDto {
    #[serde(default)]
    pub server_id: Option<LooseInteger>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
