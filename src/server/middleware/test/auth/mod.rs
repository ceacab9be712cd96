use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
    model::user::SessionUser,
};
use test_utils::context::TestContext;

mod require;

const ADMIN_IDS: &[u64] = &[123456789, 555];

fn user(discord_id: u64) -> SessionUser {
    SessionUser {
        discord_id,
        name: "Bun".to_string(),
    }
}
