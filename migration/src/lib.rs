pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_customer_table;
mod m20250901_000002_create_room_table;
mod m20250901_000003_create_user_table;
mod m20250901_000004_create_reservation_table;
mod m20250901_000005_create_transaction_table;
mod m20250901_000006_create_room_service_item_table;
mod m20250901_000007_create_room_service_order_table;
mod m20250901_000008_create_room_service_order_item_table;
mod m20250901_000009_create_hotel_analytics_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_customer_table::Migration),
            Box::new(m20250901_000002_create_room_table::Migration),
            Box::new(m20250901_000003_create_user_table::Migration),
            Box::new(m20250901_000004_create_reservation_table::Migration),
            Box::new(m20250901_000005_create_transaction_table::Migration),
            Box::new(m20250901_000006_create_room_service_item_table::Migration),
            Box::new(m20250901_000007_create_room_service_order_table::Migration),
            Box::new(m20250901_000008_create_room_service_order_item_table::Migration),
            Box::new(m20250901_000009_create_hotel_analytics_table::Migration),
        ]
    }
}
