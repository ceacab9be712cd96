//! Discord OAuth2 sign-in for the admin back office.
//!
//! The backend does not keep a user table. A successful callback yields a
//! [`SessionUser`] that the controller stores in the session; admin rights are decided
//! per request against the configured Discord ID allowlist.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use serde::Deserialize;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::SessionUser,
    state::OAuth2Client,
    util::parse::parse_u64_from_string,
};

/// Subset of the Discord user object returned by `GET /users/@me`.
#[derive(Debug, Deserialize)]
struct DiscordUser {
    id: String,
    username: String,
    #[serde(default)]
    global_name: Option<String>,
}

pub struct AuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    user_url: &'a str,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `http_client` - HTTP client used for the token exchange and user lookup
    /// - `oauth_client` - OAuth2 client configured for Discord
    /// - `user_url` - Discord endpoint returning the signed-in user
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        user_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            user_url,
        }
    }

    /// Generates a Discord OAuth2 login URL with CSRF protection.
    ///
    /// Only the `identify` scope is requested.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the CSRF state to keep in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url()
    }

    /// Exchanges the authorization code and fetches the Discord user.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the OAuth2 callback
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - The signed-in Discord user
    /// - `Err(AppError::AuthErr(TokenExchange))` - Discord rejected the code
    /// - `Err(AppError::ReqwestErr)` - Fetching the user failed
    /// - `Err(AppError::InternalErr)` - Discord returned a non-numeric user id
    pub async fn callback(&self, authorization_code: String) -> Result<SessionUser, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user = self.fetch_discord_user(&token).await?;

        Ok(SessionUser {
            discord_id: parse_u64_from_string(user.id)?,
            name: user.global_name.unwrap_or(user.username),
        })
    }

    /// Retrieves a Discord user's information using the provided access token.
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user = self
            .http_client
            .get(self.user_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user)
    }
}
