use crate::server::{
    error::AppError,
    model::room_service::{
        CreateRoomServiceItemParams, CreateRoomServiceOrderParams, OrderLine,
    },
    service::room_service::{RoomServiceItemService, RoomServiceOrderService},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_item;
