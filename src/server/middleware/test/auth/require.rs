use super::*;

mod require_admin;

/// Tests an empty permission list only requires a signed-in user.
///
/// Expected: Ok(SessionUser) for a non-admin user
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    AuthSession::new(session).set_user(&user(42)).await?;

    let result = AuthGuard::new(session, ADMIN_IDS).require(&[]).await;

    assert_eq!(result?.discord_id, 42);

    Ok(())
}

/// Tests an empty session is rejected even without permissions.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn empty_session_is_rejected() -> Result<(), AppError> {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    let result = AuthGuard::new(session, ADMIN_IDS).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
