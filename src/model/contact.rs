use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::LooseInteger;

/// What a visitor is asking the community to host.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    GameServer,
    Website,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GameServer => "game_server",
            Self::Website => "website",
        }
    }
}

impl std::str::FromStr for RequestType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "game_server" => Ok(Self::GameServer),
            "website" => Ok(Self::Website),
            other => Err(other.to_string()),
        }
    }
}

/// Body of `POST /api/contact/create`.
///
/// Every field is optional at the JSON level so that missing values are reported as
/// validation errors rather than as malformed bodies.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct CreateContactRequestDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub request_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub captcha_answer: Option<LooseInteger>,
    /// Expected answer of the challenge the caller displayed.
    #[serde(default)]
    pub captcha_correct: Option<LooseInteger>,
}

/// Arithmetic challenge issued by `GET /api/contact/captcha`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CaptchaChallengeDto {
    /// Question to display, e.g. `3 + 4`.
    pub question: String,
    pub answer: i64,
}
