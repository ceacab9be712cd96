//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game server with `mod_count` mods attached to it.
///
/// # Arguments
/// - `db` - Database connection
/// - `mod_count` - Number of mods to create for the server
///
/// # Returns
/// - `Ok((server, mods))` - The created server and its mods in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_mods(
    db: &DatabaseConnection,
    mod_count: usize,
) -> Result<(entity::game_server::Model, Vec<entity::game_mod::Model>), DbErr> {
    let server = crate::factory::game_server::create_server(db).await?;

    let mut mods = Vec::with_capacity(mod_count);
    for _ in 0..mod_count {
        mods.push(crate::factory::game_mod::create_mod(db, server.id).await?);
    }

    Ok((server, mods))
}
