use crate::server::{
    data::reservation::ReservationRepository, model::reservation::UpdateReservationParams,
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
