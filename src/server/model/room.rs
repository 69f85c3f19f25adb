use crate::model::room::RoomDto;

/// Bookable room with its nightly rate and availability flag.
///
/// The availability flag is flipped to false by the reservation service when
/// the room is booked; no flow in this service flips it back automatically.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    /// Unique room number as printed on the door.
    pub room_number: i32,
    /// Free-form category such as "Single" or "Suite".
    pub room_type: String,
    pub price_per_night: f64,
    pub is_available: bool,
}

impl Room {
    /// Converts the room domain model to a DTO for API responses.
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            room_number: self.room_number,
            room_type: self.room_type,
            price_per_night: self.price_per_night,
            is_available: self.is_available,
        }
    }

    /// Converts an entity model to a room domain model at the repository boundary.
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            room_number: entity.room_number,
            room_type: entity.room_type,
            price_per_night: entity.price_per_night,
            is_available: entity.is_available,
        }
    }
}

/// Parameters for adding a new room. Rooms start out available.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub room_number: i32,
    pub room_type: String,
    pub price_per_night: f64,
}

/// Field mask for partial room updates.
///
/// `None` leaves the stored value untouched; only the fields listed here can
/// be patched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParams {
    pub room_number: Option<i32>,
    pub room_type: Option<String>,
    pub price_per_night: Option<f64>,
    pub is_available: Option<bool>,
}
