use super::*;

/// Tests deleting an existing website.
///
/// Expected: Ok(1) and the row is gone
#[tokio::test]
async fn deletes_website() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Website)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let website = factory::create_website(db).await?;
    let kept = factory::create_website(db).await?;

    let removed = WebsiteRepository::new(db).delete(website.id).await?;

    assert_eq!(removed, 1);
    assert!(entity::prelude::Website::find_by_id(website.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Website::find_by_id(kept.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting an id that was never inserted.
///
/// Verifies that the delete succeeds without touching existing rows.
///
/// Expected: Ok(0) with the table unchanged
#[tokio::test]
async fn succeeds_for_missing_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Website)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_website(db).await?;

    let removed = WebsiteRepository::new(db).delete(999_999).await?;

    assert_eq!(removed, 0);
    assert_eq!(entity::prelude::Website::find().count(db).await?, 1);

    Ok(())
}
