//! Room service domain models and parameters.
//!
//! The catalog (`RoomServiceItem`) is priced per item; an order ties a set of
//! item/quantity lines to a reservation with a derived total.

use crate::model::room_service::{OrderLineDto, RoomServiceItemDto, RoomServiceOrderDto};

/// Catalog entry orderable through room service.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomServiceItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl RoomServiceItem {
    /// Converts the item domain model to a DTO for API responses.
    pub fn into_dto(self) -> RoomServiceItemDto {
        RoomServiceItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }

    /// Converts an entity model to an item domain model at the repository boundary.
    pub fn from_entity(entity: entity::room_service_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
        }
    }
}

/// Parameters for adding a catalog item.
#[derive(Debug, Clone)]
pub struct CreateRoomServiceItemParams {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// One item/quantity pair within an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub item_id: i32,
    pub quantity: i32,
}

impl OrderLine {
    /// Converts the order line domain model to a DTO for API responses.
    pub fn into_dto(self) -> OrderLineDto {
        OrderLineDto {
            item_id: self.item_id,
            quantity: self.quantity,
        }
    }

    /// Converts an entity model to an order line domain model at the repository boundary.
    pub fn from_entity(entity: entity::room_service_order_item::Model) -> Self {
        Self {
            item_id: entity.room_service_item_id,
            quantity: entity.quantity,
        }
    }
}

/// Room service order with its lines.
///
/// `total_cost` is derived from the catalog prices at ordering time and is
/// never user-supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomServiceOrder {
    pub id: i32,
    pub reservation_id: i32,
    pub total_cost: f64,
    pub status: String,
    pub items: Vec<OrderLine>,
}

impl RoomServiceOrder {
    /// Converts the order domain model to a DTO for API responses.
    pub fn into_dto(self) -> RoomServiceOrderDto {
        RoomServiceOrderDto {
            id: self.id,
            reservation_id: self.reservation_id,
            total_cost: self.total_cost,
            status: self.status,
            items: self.items.into_iter().map(|line| line.into_dto()).collect(),
        }
    }

    /// Builds the order domain model from its entity row and line rows.
    pub fn from_entity(
        entity: entity::room_service_order::Model,
        lines: Vec<entity::room_service_order_item::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            total_cost: entity.total_cost,
            status: entity.status,
            items: lines.into_iter().map(OrderLine::from_entity).collect(),
        }
    }
}

/// Parameters for placing a room service order.
#[derive(Debug, Clone)]
pub struct CreateRoomServiceOrderParams {
    pub reservation_id: i32,
    pub lines: Vec<OrderLine>,
}
