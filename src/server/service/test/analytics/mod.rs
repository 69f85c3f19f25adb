use crate::server::{error::AppError, service::analytics::AnalyticsService};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
