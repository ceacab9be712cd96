use super::*;

/// Tests an empty database yields an empty dashboard.
///
/// Expected: Ok with no websites and no servers
#[tokio::test]
async fn returns_empty_dashboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = DashboardCache::new(CacheEvents::new());

    let dashboard = DashboardService::new(db, &cache).get_dashboard().await?;

    assert!(dashboard.websites.is_empty());
    assert!(dashboard.servers.is_empty());

    Ok(())
}

/// Tests the newest website comes first with its stored fields.
///
/// Expected: Ok with the inserted website first
#[tokio::test]
async fn returns_newest_website_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = DashboardCache::new(CacheEvents::new());

    factory::website::WebsiteFactory::new(db)
        .created_at(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let newest = factory::website::WebsiteFactory::new(db)
        .name("Cuddle Wiki")
        .url("https://wiki.example.com")
        .description(Some("Community knowledge base".to_string()))
        .created_at(Utc::now())
        .build()
        .await?;

    let dashboard = DashboardService::new(db, &cache).get_dashboard().await?;

    assert_eq!(dashboard.websites.len(), 2);
    let first = &dashboard.websites[0];
    assert_eq!(first.id, newest.id);
    assert_eq!(first.name, "Cuddle Wiki");
    assert_eq!(first.url, "https://wiki.example.com");
    assert_eq!(first.description.as_deref(), Some("Community knowledge base"));

    Ok(())
}

/// Tests each server carries exactly its own mods.
///
/// Expected: Ok with two mods on the first server and one on the other
#[tokio::test]
async fn joins_mods_onto_servers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = DashboardCache::new(CacheEvents::new());

    let (server, mods) = factory::helpers::create_server_with_mods(db, 2).await?;
    let (other, other_mods) = factory::helpers::create_server_with_mods(db, 1).await?;

    let dashboard = DashboardService::new(db, &cache).get_dashboard().await?;

    assert_eq!(dashboard.servers.len(), 2);
    for entry in &dashboard.servers {
        let ids: Vec<i32> = entry.mods.iter().map(|m| m.id).collect();
        if entry.server.id == server.id {
            assert_eq!(ids, mods.iter().map(|m| m.id).collect::<Vec<_>>());
        } else {
            assert_eq!(entry.server.id, other.id);
            assert_eq!(ids, vec![other_mods[0].id]);
        }
    }

    Ok(())
}

/// Tests reads are served from the cache until an invalidation.
///
/// Verifies that a row inserted behind the service's back stays hidden while the cache
/// is fresh and shows up once an invalidation is emitted.
///
/// Expected: stale read before the invalidation, fresh read after it
#[tokio::test]
async fn serves_cache_until_invalidated() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dashboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let events = CacheEvents::new();
    let cache = DashboardCache::new(events.clone());
    let service = DashboardService::new(db, &cache);

    assert!(service.get_dashboard().await?.websites.is_empty());

    factory::create_website(db).await?;
    assert!(service.get_dashboard().await?.websites.is_empty());

    events.emit(CacheKey::Dashboard);
    assert_eq!(service.get_dashboard().await?.websites.len(), 1);

    Ok(())
}

/// Tests a persistence failure surfaces as an error without partial results.
///
/// Expected: Err(AppError::DbErr) when the mods table is missing
#[tokio::test]
async fn fails_when_query_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Website)
        .with_table(entity::prelude::GameServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = DashboardCache::new(CacheEvents::new());

    factory::create_website(db).await?;

    let result = DashboardService::new(db, &cache).get_dashboard().await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
