use crate::server::{data::analytics::AnalyticsRepository, model::analytics::CreateSnapshotParams};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod counts;
mod group_counts;
mod sums;
