//! Demo data seeding for local development.
//!
//! Populates customers, rooms, users, the room service catalog, reservations,
//! transactions, and orders with deterministic sample data. Every insert is
//! guarded by a lookup, so running the seeder repeatedly (or against a
//! half-seeded database) only fills the gaps. Gated behind
//! `Config::seed_demo_data`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::{
    data::{
        customer::CustomerRepository,
        reservation::ReservationRepository,
        room::RoomRepository,
        room_service::{RoomServiceItemRepository, RoomServiceOrderRepository},
        transaction::TransactionRepository,
        user::UserRepository,
    },
    model::{
        customer::CreateCustomerParams,
        room::CreateRoomParams,
        room_service::{CreateRoomServiceItemParams, OrderLine},
        transaction::CreateTransactionParams,
        user::Role,
    },
    service::auth::hash_password,
};

const CUSTOMER_NAMES: [&str; 10] = [
    "John Doe",
    "Jane Smith",
    "Peter Jones",
    "Mary Brown",
    "David Wilson",
    "Linda Davis",
    "Michael Thomas",
    "Jennifer Garcia",
    "Robert Martinez",
    "Barbara Rodriguez",
];

const ROOM_TYPES: [&str; 4] = ["Single", "Double", "Suite", "Deluxe"];

const ITEM_NAMES: [&str; 9] = [
    "Breakfast",
    "Lunch",
    "Dinner",
    "Coffee",
    "Tea",
    "Water",
    "Soft Drinks",
    "Wine",
    "Beer",
];

/// Seeds the database with demo data.
///
/// # Returns
/// - `Ok(())` - All stages completed
/// - `Err(DbErr)` - Database error; earlier stages stay committed
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    seed_customers(db).await?;
    seed_rooms(db).await?;
    seed_users(db).await?;
    seed_items(db).await?;
    seed_reservations(db).await?;
    seed_transactions(db).await?;
    seed_orders(db).await?;

    tracing::info!("Demo data seeded");

    Ok(())
}

async fn seed_customers(db: &DatabaseConnection) -> Result<(), DbErr> {
    let repo = CustomerRepository::new(db);

    for i in 0..100 {
        let email = format!("customer{}@example.com", i);
        if repo.find_by_email(&email).await?.is_some() {
            continue;
        }

        repo.create(CreateCustomerParams {
            name: format!("{} {}", CUSTOMER_NAMES[i % CUSTOMER_NAMES.len()], i),
            email,
            phone_number: format!("+1555123456{}", i),
        })
        .await?;
    }

    Ok(())
}

async fn seed_rooms(db: &DatabaseConnection) -> Result<(), DbErr> {
    let repo = RoomRepository::new(db);

    for i in 0..100 {
        let room_number = i as i32 + 1;
        if repo.find_by_room_number(room_number).await?.is_some() {
            continue;
        }

        repo.create(CreateRoomParams {
            room_number,
            room_type: ROOM_TYPES[i % ROOM_TYPES.len()].to_string(),
            price_per_night: (100 + i * 5) as f64,
        })
        .await?;
    }

    Ok(())
}

async fn seed_users(db: &DatabaseConnection) -> Result<(), DbErr> {
    let repo = UserRepository::new(db);

    for i in 0..100 {
        let username = format!("user{}", i);
        if repo.find_by_username(&username).await?.is_some() {
            continue;
        }

        let digest = hash_password(&format!("password{}", i));
        repo.create(username, digest, Role::User).await?;
    }

    Ok(())
}

async fn seed_items(db: &DatabaseConnection) -> Result<(), DbErr> {
    let repo = RoomServiceItemRepository::new(db);

    for (i, name) in ITEM_NAMES.iter().enumerate() {
        let existing = entity::prelude::RoomServiceItem::find()
            .filter(entity::room_service_item::Column::Name.eq(*name))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        repo.create(CreateRoomServiceItemParams {
            name: name.to_string(),
            description: Some(format!("Room service item {}", i)),
            price: (i * 2 + 5) as f64,
        })
        .await?;
    }

    Ok(())
}

async fn seed_reservations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let room_repo = RoomRepository::new(db);
    let reservation_repo = ReservationRepository::new(db);

    for i in 0..100u32 {
        let customer_id = (i % 10) as i32 + 1;
        let room_id = (i % 10) as i32 + 1;

        // January 2024 stays, three nights each, clamped to the month end.
        // Ranges that clamp to zero nights are skipped.
        let Some(check_in_date) = jan_2024(std::cmp::min(i + 1, 31)) else {
            continue;
        };
        let Some(check_out_date) = jan_2024(std::cmp::min(i + 4, 31)) else {
            continue;
        };
        let nights = (check_out_date - check_in_date).num_days();
        if nights < 1 {
            continue;
        }

        let existing = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::CustomerId.eq(customer_id))
            .filter(entity::reservation::Column::RoomId.eq(room_id))
            .filter(entity::reservation::Column::CheckInDate.eq(check_in_date))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let Some(room) = room_repo.find_by_id(room_id).await? else {
            continue;
        };

        reservation_repo
            .create(
                customer_id,
                room_id,
                check_in_date,
                check_out_date,
                nights as f64 * room.price_per_night,
            )
            .await?;
        room_repo.try_occupy(room_id).await?;
    }

    Ok(())
}

async fn seed_transactions(db: &DatabaseConnection) -> Result<(), DbErr> {
    let reservation_repo = ReservationRepository::new(db);
    let transaction_repo = TransactionRepository::new(db);

    for i in 0..100 {
        let reservation_id = i % 10 + 1;

        let existing = entity::prelude::Transaction::find()
            .filter(entity::transaction::Column::ReservationId.eq(reservation_id))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }
        if reservation_repo.find_by_id(reservation_id).await?.is_none() {
            continue;
        }

        transaction_repo
            .create(CreateTransactionParams {
                reservation_id,
                amount: (100 + i * 2) as f64,
                payment_method: "Credit Card".to_string(),
            })
            .await?;
    }

    Ok(())
}

async fn seed_orders(db: &DatabaseConnection) -> Result<(), DbErr> {
    let reservation_repo = ReservationRepository::new(db);
    let item_repo = RoomServiceItemRepository::new(db);
    let order_repo = RoomServiceOrderRepository::new(db);

    for i in 0..100 {
        let reservation_id = i % 10 + 1;

        let existing = entity::prelude::RoomServiceOrder::find()
            .filter(entity::room_service_order::Column::ReservationId.eq(reservation_id))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }
        if reservation_repo.find_by_id(reservation_id).await?.is_none() {
            continue;
        }

        let mut total_cost = 0.0;
        let mut lines = Vec::new();
        for j in 0..3 {
            let item_id = (i + j) % 10 + 1;
            // The cycle reaches one id past the catalog; skip lines whose
            // item does not exist.
            let Some(item) = item_repo.find_by_id(item_id).await? else {
                continue;
            };

            let quantity = j + 1;
            total_cost += item.price * quantity as f64;
            lines.push(OrderLine { item_id, quantity });
        }

        order_repo.create(reservation_id, total_cost, lines).await?;
    }

    Ok(())
}

fn jan_2024(day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(2024, 1, day).map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
