//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Factories automatically handle foreign
//! key relationships where they can, making tests more concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let customer = factory::customer::create_customer(&db).await?;
//!     let room = factory::room::create_room(&db).await?;
//!
//!     // Create with all dependencies
//!     let (customer, room, reservation) =
//!         factory::helpers::create_reservation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let room = factory::room::RoomFactory::new(&db)
//!     .room_type("Suite")
//!     .price_per_night(250.0)
//!     .available(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `customer` - Hotel guests
//! - `room` - Rooms with type, nightly price and availability
//! - `reservation` - Bookings linking a customer to a room
//! - `transaction` - Payments against a reservation
//! - `room_service_item` - Catalog entries
//! - `room_service_order` - Orders with their line items
//! - `user` - Back-office staff accounts
//! - `helpers` - Convenience methods for entities with dependencies

pub mod customer;
pub mod helpers;
pub mod reservation;
pub mod room;
pub mod room_service_item;
pub mod room_service_order;
pub mod transaction;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use customer::create_customer;
pub use reservation::create_reservation;
pub use room::{create_room, create_room_with_price};
pub use room_service_item::{create_item, create_item_with_price};
pub use room_service_order::create_order;
pub use transaction::create_transaction;
pub use user::{create_admin, create_user};
