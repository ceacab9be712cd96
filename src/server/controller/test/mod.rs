use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use tower_sessions::Session;

use crate::{
    model::{
        api::LooseInteger,
        contact::CreateContactRequestDto,
        manage::{AddEntityDto, DeleteEntityDto},
    },
    server::{
        config::Config,
        middleware::session::{AuthSession, CsrfSession},
        model::user::SessionUser,
        service::cache::CacheEvents,
        startup,
        state::AppState,
    },
};


const ADMIN_ID: u64 = 123456789;

fn test_state(db: &DatabaseConnection) -> AppState {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        app_url: "http://localhost:8080".to_string(),
        discord_client_id: "client".to_string(),
        discord_client_secret: "secret".to_string(),
        discord_redirect_url: "http://localhost:8080/api/auth/callback".to_string(),
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
        discord_user_url: "https://discord.com/api/users/@me".to_string(),
        admin_discord_ids: vec![ADMIN_ID],
    };

    AppState::new(
        db.clone(),
        startup::setup_reqwest_client().unwrap(),
        startup::setup_oauth_client(&config).unwrap(),
        CacheEvents::new(),
        &config,
    )
}

async fn sign_in(session: &Session, discord_id: u64) {
    AuthSession::new(session)
        .set_user(&SessionUser {
            discord_id,
            name: "Bun".to_string(),
        })
        .await
        .unwrap();
}
