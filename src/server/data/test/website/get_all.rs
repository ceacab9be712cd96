use super::*;

/// Tests that websites are returned newest first.
///
/// Expected: Ok with websites ordered by created_at descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Website)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::website::WebsiteFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::website::WebsiteFactory::new(db)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::website::WebsiteFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let websites = WebsiteRepository::new(db).get_all().await?;

    let ids: Vec<i32> = websites.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, older.id]);

    Ok(())
}

/// Tests that websites sharing a timestamp fall back to id order.
///
/// Expected: Ok with the later insert first
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Website)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now();
    let first = factory::website::WebsiteFactory::new(db)
        .created_at(created_at)
        .build()
        .await?;
    let second = factory::website::WebsiteFactory::new(db)
        .created_at(created_at)
        .build()
        .await?;

    let websites = WebsiteRepository::new(db).get_all().await?;

    assert_eq!(websites[0].id, second.id);
    assert_eq!(websites[1].id, first.id);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_websites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Website)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let websites = WebsiteRepository::new(db).get_all().await?;

    assert!(websites.is_empty());

    Ok(())
}
