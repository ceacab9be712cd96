use super::*;

/// Tests deleting a website id that was never inserted.
///
/// Expected: Ok(0) with the table unchanged
#[tokio::test]
async fn missing_website_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = CacheEvents::new();

    factory::create_website(db).await?;

    let removed = ManageService::new(db, &events)
        .delete(DeleteEntity {
            kind: EntityKind::Website,
            id: 9_999,
        })
        .await?;

    assert_eq!(removed, 0);
    assert_eq!(entity::prelude::Website::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a server removes it and its mods from the dashboard.
///
/// Expected: Ok(1), server and mods gone after the cache is invalidated
#[tokio::test]
async fn deleting_server_removes_its_mods() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = CacheEvents::new();
    let cache = DashboardCache::new(events.clone());

    let (server, _) = factory::helpers::create_server_with_mods(db, 2).await?;
    assert_eq!(
        DashboardService::new(db, &cache).get_dashboard().await?.servers.len(),
        1
    );

    let removed = ManageService::new(db, &events)
        .delete(DeleteEntity {
            kind: EntityKind::Server,
            id: server.id,
        })
        .await?;

    assert_eq!(removed, 1);
    assert!(DashboardService::new(db, &cache)
        .get_dashboard()
        .await?
        .servers
        .is_empty());
    assert_eq!(entity::prelude::GameMod::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a single mod keeps the server and its other mods.
///
/// Expected: Ok(1) and one remaining mod
#[tokio::test]
async fn deletes_single_mod() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = CacheEvents::new();

    let (_, mods) = factory::helpers::create_server_with_mods(db, 2).await?;

    let removed = ManageService::new(db, &events)
        .delete(DeleteEntity {
            kind: EntityKind::Mod,
            id: mods[0].id,
        })
        .await?;

    assert_eq!(removed, 1);
    assert_eq!(entity::prelude::GameServer::find().count(db).await?, 1);
    assert_eq!(entity::prelude::GameMod::find().count(db).await?, 1);
    assert_eq!(events.epoch(), 1);

    Ok(())
}
