//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Handling complex multi-step operations

pub mod analytics;
pub mod auth;
pub mod billing;
pub mod customer;
pub mod reservation;
pub mod room;
pub mod room_service;
pub mod transaction;

#[cfg(test)]
mod test;
