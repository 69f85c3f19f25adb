//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so that services can run
//! them either against the plain connection pool or inside an open transaction.

pub mod analytics;
pub mod customer;
pub mod reservation;
pub mod room;
pub mod room_service;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
