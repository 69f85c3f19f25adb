use crate::server::{
    error::AppError,
    model::reservation::{CreateReservationParams, UpdateReservationParams},
    service::reservation::ReservationService,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod update;
