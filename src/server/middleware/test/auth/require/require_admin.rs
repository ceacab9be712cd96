use super::*;

/// Tests a user on the allowlist passes the admin check.
///
/// Expected: Ok(SessionUser)
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session).set_user(&user(123456789)).await?;

    let result = AuthGuard::new(session, ADMIN_IDS)
        .require(&[Permission::Admin])
        .await;

    let returned_user = result?;
    assert_eq!(returned_user.discord_id, 123456789);
    assert_eq!(returned_user.name, "Bun");

    Ok(())
}

/// Tests a signed-in user missing from the allowlist is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session).set_user(&user(987654321)).await?;

    let result = AuthGuard::new(session, ADMIN_IDS)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id))) => {
            assert_eq!(user_id, 987654321)
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an anonymous request is rejected before the allowlist is consulted.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_without_session_user() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let result = AuthGuard::new(session, ADMIN_IDS)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests an empty allowlist denies everyone.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn empty_allowlist_denies_everyone() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session).set_user(&user(123456789)).await?;

    let result = AuthGuard::new(session, &[]).require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_)))
    ));

    Ok(())
}
