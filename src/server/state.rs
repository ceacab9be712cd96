//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client and OAuth2 client for Discord sign-in
//! - Admin allowlist guarding the back office
//! - Cache invalidation bus and dashboard cache

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    config::Config,
    service::cache::{CacheEvents, DashboardCache},
};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection pool, HTTP client, cache and bus share
/// their internals through reference counting.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for identity provider requests, configured without redirects.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord sign-in flow.
    pub oauth_client: OAuth2Client,

    /// Discord IDs allowed into the admin back office.
    pub admin_ids: Arc<[u64]>,

    /// Bus notified after every successful admin mutation.
    pub cache_events: CacheEvents,

    /// Dashboard aggregate cached for the current invalidation epoch.
    pub dashboard_cache: DashboardCache,

    /// Application base URL, used for redirects after sign-in and sign-out.
    pub app_url: String,

    /// Discord endpoint returning the signed-in user.
    pub discord_user_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// The dashboard cache is bound to `cache_events` so that every emitted invalidation
    /// makes it stale.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Discord authentication
    /// - `cache_events` - Cache invalidation bus
    /// - `config` - Application configuration providing the URLs and admin allowlist
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        cache_events: CacheEvents,
        config: &Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            admin_ids: Arc::from(config.admin_discord_ids.as_slice()),
            dashboard_cache: DashboardCache::new(cache_events.clone()),
            cache_events,
            app_url: config.app_url.trim_end_matches('/').to_string(),
            discord_user_url: config.discord_user_url.clone(),
        }
    }
}
