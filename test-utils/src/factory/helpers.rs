//! Shared helper utilities for factory methods.
//!
//! Provides the unique-ID counter used by every factory plus convenience
//! methods for creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a reservation with its customer and room dependencies.
///
/// This is a convenience method that creates:
/// 1. Customer (the guest)
/// 2. Room (marked unavailable, as a booking would leave it)
/// 3. Reservation linking the two
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((customer, room, reservation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::customer::Model,
        entity::room::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::customer::create_customer(db).await?;
    let room = crate::factory::room::RoomFactory::new(db)
        .available(false)
        .build()
        .await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, customer.id, room.id).await?;

    Ok((customer, room, reservation))
}
