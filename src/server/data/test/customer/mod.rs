use crate::server::{data::customer::CustomerRepository, model::customer::CreateCustomerParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
