use crate::server::{
    error::AppError,
    model::room::{CreateRoomParams, UpdateRoomParams},
    service::room::RoomService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
