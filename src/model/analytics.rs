use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Point-in-time snapshot of hotel-wide statistics.
///
/// `most_popular_room_type` and `most_popular_service_item` are null when
/// there are no rooms or no order lines to rank.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AnalyticsSnapshotDto {
    #[serde(with = "chrono::serde::ts_seconds")]
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
