use crate::model::customer::CustomerDto;

/// Guest registered with the hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    /// Unique contact email.
    pub email: String,
    pub phone_number: String,
}

impl Customer {
    /// Converts the customer domain model to a DTO for API responses.
    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }

    /// Converts an entity model to a customer domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone_number: entity.phone_number,
        }
    }
}

/// Parameters for registering a new customer.
#[derive(Debug, Clone)]
pub struct CreateCustomerParams {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}
