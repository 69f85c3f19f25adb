use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

/// Access requirement checked by [`AuthGuard::require`].
pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session principal and checks the required permissions.
    ///
    /// Fails closed: a missing session user, a session pointing at a deleted
    /// user row, or a missing role all abort the request before the handler
    /// body runs. An empty permission slice admits any authenticated user.
    ///
    /// # Arguments
    /// - `permissions`: Permissions the authenticated user must hold
    ///
    /// # Returns
    /// - `Ok(User)`: The authenticated user
    /// - `Err(AppError::AuthErr)`: Not logged in, stale session, or role missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user_entity) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let user = User::from_entity(user_entity)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != Role::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
