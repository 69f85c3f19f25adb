use crate::server::{
    error::AppError, model::transaction::CreateTransactionParams,
    service::transaction::TransactionService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
