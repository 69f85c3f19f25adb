use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParams, Role},
    service::auth::{hash_password, AuthService},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
