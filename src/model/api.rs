use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body returned by every successful mutation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

impl SuccessDto {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Integer sent either as a JSON number or as a numeric string.
///
/// HTML forms submit every field as a string, so ids and captcha answers arrive in
/// both shapes depending on the caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum LooseInteger {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl LooseInteger {
    /// Integer value, truncating decimals and ignoring surrounding whitespace.
    ///
    /// # Returns
    /// - `Some(i64)` - The value parsed as an integer
    /// - `None` - The text is not a number or the decimal is not finite
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Decimal(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Decimal(_) => None,
            Self::Text(text) => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| match text.parse::<f64>() {
                        Ok(value) if value.is_finite() => Some(value.trunc() as i64),
                        _ => None,
                    })
            }
        }
    }

    /// Value as a database id, rejecting anything outside the `i32` range.
    pub fn as_id(&self) -> Option<i32> {
        self.as_i64().and_then(|value| i32::try_from(value).ok())
    }
}

impl From<i64> for LooseInteger {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}
