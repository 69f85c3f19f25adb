pub use super::customer::Entity as Customer;
pub use super::hotel_analytics::Entity as HotelAnalytics;
pub use super::reservation::Entity as Reservation;
pub use super::room::Entity as Room;
pub use super::room_service_item::Entity as RoomServiceItem;
pub use super::room_service_order::Entity as RoomServiceOrder;
pub use super::room_service_order_item::Entity as RoomServiceOrderItem;
pub use super::transaction::Entity as Transaction;
pub use super::user::Entity as User;
