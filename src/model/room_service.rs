use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRoomServiceItemDto {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomServiceItemDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// One catalog item plus quantity within an order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderLineDto {
    pub item_id: i32,
    /// Defaults to 1 when omitted.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRoomServiceOrderDto {
    pub reservation_id: i32,
    /// Defaults to an empty order when omitted.
    #[serde(default)]
    pub items: Vec<OrderLineDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomServiceOrderDto {
    pub id: i32,
    pub reservation_id: i32,
    pub total_cost: f64,
    pub status: String,
    pub items: Vec<OrderLineDto>,
}
