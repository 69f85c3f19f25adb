//! Request-scoped guards and session wrappers.
//!
//! Handlers construct these by hand at the top of the function body rather
//! than through tower layers, so each endpoint states its own access
//! requirements explicitly.

pub mod auth;
pub mod session;
