//! HTTP request handlers for the API.
//!
//! Each controller module covers one resource. Handlers check access through
//! [`AuthGuard`](crate::server::middleware::auth::AuthGuard) at the top of the
//! function body, convert DTOs into service parameter types, call the service
//! layer, and convert the returned domain models back into DTOs. Every handler
//! carries a `#[utoipa::path]` annotation feeding the OpenAPI document served
//! at `/docs`.

pub mod analytics;
pub mod auth;
pub mod customer;
pub mod health;
pub mod reservation;
pub mod room;
pub mod room_service;
pub mod transaction;
