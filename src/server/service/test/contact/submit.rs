use super::*;

/// Tests a submission with the right captcha answer is stored.
///
/// Expected: Ok with one contact request stored
#[tokio::test]
async fn stores_request_with_correct_captcha() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = ContactService::new(db).submit(submission(7, 7)).await?;

    assert_eq!(request.name, "Bun");
    assert_eq!(request.request_type, "game_server");
    assert_eq!(entity::prelude::ContactRequest::find().count(db).await?, 1);

    Ok(())
}

/// Tests a wrong captcha answer is rejected and nothing is stored.
///
/// Expected: Err(BadRequest("Invalid captcha")) and an empty table
#[tokio::test]
async fn rejects_wrong_captcha() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ContactService::new(db).submit(submission(6, 7)).await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid captcha"));
    assert_eq!(entity::prelude::ContactRequest::find().count(db).await?, 0);

    Ok(())
}

/// Tests the captcha is checked before the other fields.
///
/// Expected: Err(BadRequest("Invalid captcha")) although the message is empty
#[tokio::test]
async fn checks_captcha_before_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ContactService::new(db)
        .submit(ContactSubmission {
            message: None,
            ..submission(1, 2)
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid captcha"));

    Ok(())
}

/// Tests an empty message fails validation even with a correct captcha.
///
/// Expected: Err(BadRequest("Missing required fields")) and an empty table
#[tokio::test]
async fn rejects_empty_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ContactService::new(db)
        .submit(ContactSubmission {
            message: Some("".to_string()),
            ..submission(7, 7)
        })
        .await;

    assert!(
        matches!(result, Err(AppError::BadRequest(msg)) if msg == "Missing required fields")
    );
    assert_eq!(entity::prelude::ContactRequest::find().count(db).await?, 0);

    Ok(())
}

/// Tests an unknown request type is rejected.
///
/// Expected: Err(BadRequest("Invalid request type"))
#[tokio::test]
async fn rejects_unknown_request_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactRequest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ContactService::new(db)
        .submit(ContactSubmission {
            request_type: Some("discord_bot".to_string()),
            ..submission(3, 3)
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid request type"));
    assert_eq!(entity::prelude::ContactRequest::find().count(db).await?, 0);

    Ok(())
}
