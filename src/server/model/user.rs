//! User domain models and parameters.
//!
//! Staff accounts carry a role that gates access to management endpoints.
//! Roles are stored as strings and parsed into [`Role`] at the repository
//! boundary; an unparseable stored role is treated as data corruption.

use crate::{model::auth::UserDto, server::error::AppError};

/// Access role assigned to a staff account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Stored string form of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Parses a role string, either client-supplied or stored.
    ///
    /// # Returns
    /// - `Some(Role)` - Recognized role
    /// - `None` - Unknown role string
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Staff account with its access role.
///
/// The password digest stays in the entity layer; it is never carried on the
/// domain model or exposed through a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    pub role: Role,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            role: self.role.as_str().to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalError)` - The stored role string is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown role '{}' stored for user {}",
                entity.role, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            role,
        })
    }
}

/// Parameters for registering a new staff account.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    /// Plaintext password; digested by the auth service before storage.
    pub password: String,
    pub role: Role,
}
