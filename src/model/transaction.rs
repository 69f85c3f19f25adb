use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTransactionDto {
    pub reservation_id: i32,
    pub amount: f64,
    pub payment_method: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TransactionDto {
    pub id: i32,
    pub reservation_id: i32,
    pub amount: f64,
    pub payment_method: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
}
