use crate::server::{
    data::room::RoomRepository,
    model::room::{CreateRoomParams, UpdateRoomParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_room_number;
mod try_occupy;
mod update;
