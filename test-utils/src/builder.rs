use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Customer, Room};
///
/// let test = TestBuilder::new()
///     .with_table(Customer)
///     .with_table(Room)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated from
    /// entity models and executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Tables should be added in dependency order (tables
    /// with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for reservation operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Customer
    /// - Room
    /// - Reservation
    ///
    /// Use this when testing booking functionality that does not involve room
    /// service or payments. For those, use `with_room_service_tables()` or
    /// `with_hotel_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reservation_tables(self) -> Self {
        self.with_table(Customer)
            .with_table(Room)
            .with_table(Reservation)
    }

    /// Adds the tables required for room-service order operations.
    ///
    /// Equivalent to `with_reservation_tables()` plus the room-service catalog,
    /// order and order-line tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_room_service_tables(self) -> Self {
        self.with_reservation_tables()
            .with_table(RoomServiceItem)
            .with_table(RoomServiceOrder)
            .with_table(RoomServiceOrderItem)
    }

    /// Adds every hotel table, including payments and analytics snapshots.
    ///
    /// Use this for billing and analytics tests that read across the whole
    /// ledger. Equivalent to `with_room_service_tables()` plus Transaction and
    /// HotelAnalytics.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_hotel_tables(self) -> Self {
        self.with_room_service_tables()
            .with_table(Transaction)
            .with_table(HotelAnalytics)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE
    /// TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
