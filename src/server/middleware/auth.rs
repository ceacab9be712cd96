use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::SessionUser,
};

pub enum Permission {
    Admin,
}

/// Guards admin routes by checking the session user against the admin allowlist.
pub struct AuthGuard<'a> {
    session: &'a Session,
    admin_ids: &'a [u64],
}

impl<'a> AuthGuard<'a> {
    /// Creates a new AuthGuard.
    ///
    /// # Arguments
    /// - `session` - Session of the current request
    /// - `admin_ids` - Discord IDs allowed into the admin back office
    pub fn new(session: &'a Session, admin_ids: &'a [u64]) -> Self {
        Self { session, admin_ids }
    }

    /// Requires a signed-in user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - The signed-in user
    /// - `Err(AuthError::UserNotInSession)` - Nobody is signed in (401)
    /// - `Err(AuthError::AccessDenied)` - A permission is missing (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<SessionUser, AppError> {
        let Some(user) = AuthSession::new(self.session).get_user().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !self.admin_ids.contains(&user.discord_id) {
                        return Err(AuthError::AccessDenied(user.discord_id).into());
                    }
                }
            }
        }

        Ok(user)
    }
}
