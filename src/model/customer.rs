use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCustomerDto {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CustomerDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}
