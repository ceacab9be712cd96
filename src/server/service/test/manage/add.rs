use super::*;

/// Tests adding a website and reading it back through the dashboard.
///
/// Expected: Ok with the website first on the dashboard
#[tokio::test]
async fn adds_website_visible_on_dashboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = CacheEvents::new();
    let cache = DashboardCache::new(events.clone());

    factory::create_website(db).await?;
    // Warm the cache before the mutation
    DashboardService::new(db, &cache).get_dashboard().await?;

    let id = ManageService::new(db, &events)
        .add(NewEntity::Website(CreateWebsiteParam {
            name: "Cuddle Wiki".to_string(),
            url: "https://wiki.example.com".to_string(),
            description: Some("Community knowledge base".to_string()),
        }))
        .await?;

    let dashboard = DashboardService::new(db, &cache).get_dashboard().await?;

    assert_eq!(dashboard.websites.len(), 2);
    assert_eq!(dashboard.websites[0].id, id);
    assert_eq!(dashboard.websites[0].name, "Cuddle Wiki");

    Ok(())
}

/// Tests adding a server and two mods shows them together on the dashboard.
///
/// Expected: Ok with the server holding both mods and no foreign mods
#[tokio::test]
async fn adds_server_with_mods() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = CacheEvents::new();
    let cache = DashboardCache::new(events.clone());
    let service = ManageService::new(db, &events);

    let (other, _) = factory::helpers::create_server_with_mods(db, 1).await?;

    let server_id = service
        .add(NewEntity::Server(CreateGameServerParam {
            name: "Cuddle Craft".to_string(),
            game: "Minecraft".to_string(),
            description: None,
            status: ServerStatus::Online,
        }))
        .await?;
    for name in ["Create", "Farmer's Delight"] {
        service
            .add(NewEntity::Mod(CreateGameModParam {
                server_id,
                name: name.to_string(),
                url: format!("https://mods.example.com/{}", name),
            }))
            .await?;
    }

    let dashboard = DashboardService::new(db, &cache).get_dashboard().await?;

    let entry = dashboard
        .servers
        .iter()
        .find(|entry| entry.server.id == server_id)
        .unwrap();
    assert_eq!(entry.server.status, ServerStatus::Online);
    assert_eq!(entry.mods.len(), 2);
    assert!(entry.mods.iter().all(|m| m.server_id == server_id));
    assert!(entry.mods.iter().all(|m| m.server_id != other.id));

    Ok(())
}

/// Tests a mod for a missing server fails without emitting an invalidation.
///
/// Expected: Err(AppError::DbErr) and the epoch unchanged
#[tokio::test]
async fn mod_for_missing_server_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = CacheEvents::new();

    let result = ManageService::new(db, &events)
        .add(NewEntity::Mod(CreateGameModParam {
            server_id: 404,
            name: "Orphan".to_string(),
            url: "https://mods.example.com/orphan".to_string(),
        }))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(events.epoch(), 0);
    assert_eq!(entity::prelude::GameMod::find().count(db).await?, 0);

    Ok(())
}

/// Tests a successful add broadcasts a dashboard invalidation.
///
/// Expected: one event for the dashboard key
#[tokio::test]
async fn emits_invalidation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = CacheEvents::new();
    let mut receiver = events.subscribe();

    ManageService::new(db, &events)
        .add(NewEntity::Website(CreateWebsiteParam {
            name: "Fan Art".to_string(),
            url: "https://art.example.com".to_string(),
            description: None,
        }))
        .await?;

    let event = receiver.recv().await.unwrap();
    assert_eq!(event.key, CacheKey::Dashboard);
    assert_eq!(events.epoch(), 1);

    Ok(())
}
