pub mod prelude;

pub mod customer;
pub mod hotel_analytics;
pub mod reservation;
pub mod room;
pub mod room_service_item;
pub mod room_service_order;
pub mod room_service_order_item;
pub mod transaction;
pub mod user;
