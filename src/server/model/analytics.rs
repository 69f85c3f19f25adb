//! Analytics snapshot domain model.

use chrono::{DateTime, Utc};

use crate::model::analytics::AnalyticsSnapshotDto;

/// Point-in-time aggregate statistics over the whole hotel.
///
/// Snapshots are immutable once written; every computation call persists a
/// fresh row. The popularity fields are `None` when there is nothing to rank.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSnapshot {
    pub id: i32,
    /// When the snapshot was computed.
    pub date: DateTime<Utc>,
    pub total_reservations: i32,
    pub total_customers: i32,
    /// Sum of all transaction amounts.
    pub total_revenue: f64,
    /// Sum of all reservation costs.
    pub room_revenue: f64,
    /// Sum of all room service order totals.
    pub room_service_revenue: f64,
    pub occupied_rooms: i32,
    pub total_rooms: i32,
    /// Room revenue per reservation, 0 when there are no reservations.
    pub average_daily_rate: f64,
    /// Total revenue per room, 0 when there are no rooms.
    pub revenue_per_available_room: f64,
    /// Occupied share of all rooms in percent, 0 when there are no rooms.
    pub average_occupancy_rate: f64,
    pub most_popular_room_type: Option<String>,
    /// Stringified id of the most ordered catalog item.
    pub most_popular_service_item: Option<String>,
}

impl AnalyticsSnapshot {
    /// Converts the snapshot domain model to a DTO for API responses.
    pub fn into_dto(self) -> AnalyticsSnapshotDto {
        AnalyticsSnapshotDto {
            date: self.date,
            total_reservations: self.total_reservations,
            total_customers: self.total_customers,
            total_revenue: self.total_revenue,
            room_revenue: self.room_revenue,
            room_service_revenue: self.room_service_revenue,
            occupied_rooms: self.occupied_rooms,
            total_rooms: self.total_rooms,
            average_daily_rate: self.average_daily_rate,
            revenue_per_available_room: self.revenue_per_available_room,
            average_occupancy_rate: self.average_occupancy_rate,
            most_popular_room_type: self.most_popular_room_type,
            most_popular_service_item: self.most_popular_service_item,
        }
    }

    /// Converts an entity model to a snapshot domain model at the repository boundary.
    pub fn from_entity(entity: entity::hotel_analytics::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            total_reservations: entity.total_reservations,
            total_customers: entity.total_customers,
            total_revenue: entity.total_revenue,
            room_revenue: entity.room_revenue,
            room_service_revenue: entity.room_service_revenue,
            occupied_rooms: entity.occupied_rooms,
            total_rooms: entity.total_rooms,
            average_daily_rate: entity.average_daily_rate,
            revenue_per_available_room: entity.revenue_per_available_room,
            average_occupancy_rate: entity.average_occupancy_rate,
            most_popular_room_type: entity.most_popular_room_type,
            most_popular_service_item: entity.most_popular_service_item,
        }
    }
}

/// Values for persisting a freshly computed snapshot.
#[derive(Debug, Clone)]
pub struct CreateSnapshotParams {
    pub date: DateTime<Utc>,
    pub total_reservations: i32,
    pub total_customers: i32,
    pub total_revenue: f64,
    pub room_revenue: f64,
    pub room_service_revenue: f64,
    pub occupied_rooms: i32,
    pub total_rooms: i32,
    pub average_daily_rate: f64,
    pub revenue_per_available_room: f64,
    pub average_occupancy_rate: f64,
    pub most_popular_room_type: Option<String>,
    pub most_popular_service_item: Option<String>,
}
