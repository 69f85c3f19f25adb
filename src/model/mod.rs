//! # API Models
//!
//! Request and response bodies for every HTTP endpoint. These are the wire
//! types only; domain models live in `server::model` and are converted into
//! DTOs at the controller boundary.
//!
//! Dates are serialized as Unix timestamps (seconds). Errors serialize as
//! `{"error": "..."}` via [`api::ErrorDto`].

pub mod analytics;
pub mod api;
pub mod auth;
pub mod customer;
pub mod reservation;
pub mod room;
pub mod room_service;
pub mod transaction;
