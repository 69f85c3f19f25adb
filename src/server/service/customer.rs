use sea_orm::DatabaseConnection;

use crate::server::{
    data::customer::CustomerRepository,
    error::AppError,
    model::customer::{CreateCustomerParams, Customer},
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new customer profile
    ///
    /// # Arguments
    /// - `params`: Customer name and contact details
    ///
    /// # Returns
    /// - `Ok(Customer)`: The created customer
    /// - `Err(AppError::Conflict)`: Email is already registered
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, AppError> {
        let repo = CustomerRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        Ok(repo.create(params).await?)
    }

    /// Gets all customers
    ///
    /// # Returns
    /// - `Ok(Vec<Customer>)`: All customers (empty if none exist)
    /// - `Err(AppError)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        let repo = CustomerRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
