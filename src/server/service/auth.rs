use sea_orm::DatabaseConnection;
use sha2::{Digest, Sha256};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParams, User},
};

/// Computes the hex-encoded SHA-256 digest of a password.
///
/// Stored digests and login attempts are compared through this one function,
/// so its output format must stay stable.
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Service for staff account registration and credential checks.
///
/// Acts as the orchestration layer between the HTTP handlers and the user
/// repository. Passwords are digested before storage and the plaintext is
/// dropped; the digest itself never leaves this layer.
pub struct AuthService<'a> {
    /// Database connection for user operations.
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db`: Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService`: New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new staff account
    ///
    /// Rejects usernames that are already taken, then stores the account with
    /// a digest of the password. The unique constraint on the username backs
    /// the pre-check.
    ///
    /// # Arguments
    /// - `params`: Username, plaintext password, and role
    ///
    /// # Returns
    /// - `Ok(User)`: The newly registered account
    /// - `Err(AppError::AuthErr)`: Username is already taken
    /// - `Err(AppError)`: Database error
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo
            .find_by_username(&params.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken.into());
        }

        let digest = hash_password(&params.password);
        let user = user_repo
            .create(params.username, digest, params.role)
            .await?;

        User::from_entity(user)
    }

    /// Validates a username and password pair
    ///
    /// Unknown usernames and wrong passwords produce the same error, so
    /// callers cannot probe which usernames exist.
    ///
    /// # Arguments
    /// - `username`: Account username
    /// - `password`: Plaintext password to check
    ///
    /// # Returns
    /// - `Ok(User)`: Credentials are valid
    /// - `Err(AppError::AuthErr)`: Unknown username or wrong password
    /// - `Err(AppError)`: Database error
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if user.password != hash_password(password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        User::from_entity(user)
    }
}
