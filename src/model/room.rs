use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateRoomDto {
    pub room_number: i32,
    pub room_type: String,
    pub price_per_night: f64,
}

/// Partial update: absent fields are left untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateRoomDto {
    pub room_number: Option<i32>,
    pub room_type: Option<String>,
    pub price_per_night: Option<f64>,
    pub is_available: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: i32,
    pub room_type: String,
    pub price_per_night: f64,
    pub is_available: bool,
}
