use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::customer::{CreateCustomerParams, Customer};

pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new customer
    ///
    /// # Arguments
    /// - `params`: Customer registration data
    ///
    /// # Returns
    /// - `Ok(Customer)`: The created customer
    /// - `Err(DbErr)`: Database error, including a unique violation on the email
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, DbErr> {
        let customer = entity::customer::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone_number: ActiveValue::Set(params.phone_number),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(customer))
    }

    /// Finds a customer by ID
    ///
    /// # Returns
    /// - `Ok(Some(Customer))`: Customer found
    /// - `Ok(None)`: No customer with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DbErr> {
        let customer = entity::prelude::Customer::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(customer.map(Customer::from_entity))
    }

    /// Finds a customer by email
    ///
    /// # Returns
    /// - `Ok(Some(Customer))`: Customer found
    /// - `Ok(None)`: No customer with that email
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DbErr> {
        let customer = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(customer.map(Customer::from_entity))
    }

    /// Gets all customers, unordered
    ///
    /// # Returns
    /// - `Ok(Vec<Customer>)`: All customers (empty if none exist)
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Customer>, DbErr> {
        let customers = entity::prelude::Customer::find().all(self.db).await?;

        Ok(customers.into_iter().map(Customer::from_entity).collect())
    }
}
