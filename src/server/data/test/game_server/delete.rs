use super::*;

/// Tests that deleting a game server removes its mods as well.
///
/// Verifies the cascade of the foreign key from mods to game servers while mods of
/// other servers are left untouched.
///
/// Expected: Ok(1), own mods removed, other mods kept
#[tokio::test]
async fn deletes_server_and_its_mods() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (server, _) = factory::helpers::create_server_with_mods(db, 2).await?;
    let (other, other_mods) = factory::helpers::create_server_with_mods(db, 1).await?;

    let removed = GameServerRepository::new(db).delete(server.id).await?;

    assert_eq!(removed, 1);
    assert!(entity::prelude::GameServer::find_by_id(other.id)
        .one(db)
        .await?
        .is_some());

    let remaining = entity::prelude::GameMod::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, other_mods[0].id);

    Ok(())
}

/// Tests deleting a game server id that does not exist.
///
/// Expected: Ok(0) with the table unchanged
#[tokio::test]
async fn succeeds_for_missing_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server(db).await?;

    let removed = GameServerRepository::new(db).delete(424_242).await?;

    assert_eq!(removed, 0);
    assert_eq!(entity::prelude::GameServer::find().count(db).await?, 1);

    Ok(())
}
