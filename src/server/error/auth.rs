use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The identity provider refused to exchange the authorization code.
    #[error("Failed to exchange OAuth2 authorization code: {0}")]
    TokenExchange(String),

    /// No signed-in user is stored in the session.
    #[error("No user found in session")]
    UserNotInSession,

    /// The signed-in user is not on the admin list.
    #[error("User {0} is not permitted to access the admin back office")]
    AccessDenied(u64),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - CSRF failures and rejected authorization codes
/// - 401 Unauthorized - No user in session
/// - 403 Forbidden - User is not an admin
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not signed in"),
            Self::AccessDenied(_) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
