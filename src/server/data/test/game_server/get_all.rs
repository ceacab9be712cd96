use super::*;

/// Tests that game servers are returned newest first.
///
/// Expected: Ok with servers ordered by created_at descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GameServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::game_server::GameServerFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = factory::game_server::GameServerFactory::new(db)
        .created_at(now)
        .status("offline")
        .build()
        .await?;

    let servers = GameServerRepository::new(db).get_all().await?;

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].id, newer.id);
    assert_eq!(servers[0].status, ServerStatus::Offline);
    assert_eq!(servers[1].id, older.id);
    assert_eq!(servers[1].status, ServerStatus::Online);

    Ok(())
}

/// Tests that an unknown stored status is reported instead of silently mapped.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_for_unknown_stored_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GameServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game_server::GameServerFactory::new(db)
        .status("maintenance")
        .build()
        .await?;

    let result = GameServerRepository::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
