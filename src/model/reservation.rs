use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateReservationDto {
    pub customer_id: i32,
    pub room_id: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_in_date: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_out_date: DateTime<Utc>,
}

/// Partial update: absent fields are left untouched. The total cost is
/// recomputed server-side whenever the dates or the room change and is
/// never accepted from the client.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateReservationDto {
    pub customer_id: Option<i32>,
    pub room_id: Option<i32>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub check_in_date: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub check_out_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub customer_id: i32,
    pub room_id: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_in_date: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub check_out_date: DateTime<Utc>,
    pub total_cost: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BillDto {
    pub total_cost: f64,
}
