//! User data repository for database operations.
//!
//! Unlike the other repositories this one returns entity models rather than
//! domain models: the auth service needs the stored password digest for
//! credential checks, and the digest deliberately never crosses into the
//! domain layer.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::user::Role;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with an already-digested password
    ///
    /// # Arguments
    /// - `username`: Unique login name
    /// - `password_digest`: Hex SHA-256 digest of the password
    /// - `role`: Access role for the account
    ///
    /// # Returns
    /// - `Ok(Model)`: The created user row
    /// - `Err(DbErr)`: Database error, including a unique violation on the username
    pub async fn create(
        &self,
        username: String,
        password_digest: String,
        role: Role,
    ) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password_digest),
            role: ActiveValue::Set(role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: User found
    /// - `Ok(None)`: No user with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by username
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: User found
    /// - `Ok(None)`: No user with that username
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }
}
