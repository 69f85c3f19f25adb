use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body shared by all endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain confirmation message for operations with no resource body.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Health probe response.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
