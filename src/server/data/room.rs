use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::room::{CreateRoomParams, Room, UpdateRoomParams};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new room, initially available
    ///
    /// # Arguments
    /// - `params`: Room data including number, type, and nightly rate
    ///
    /// # Returns
    /// - `Ok(Room)`: The created room
    /// - `Err(DbErr)`: Database error, including a unique violation on the room number
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let room = entity::room::ActiveModel {
            room_number: ActiveValue::Set(params.room_number),
            room_type: ActiveValue::Set(params.room_type),
            price_per_night: ActiveValue::Set(params.price_per_night),
            is_available: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(room))
    }

    /// Finds a room by ID
    ///
    /// # Returns
    /// - `Ok(Some(Room))`: Room found
    /// - `Ok(None)`: No room with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let room = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(room.map(Room::from_entity))
    }

    /// Finds a room by its room number
    ///
    /// # Returns
    /// - `Ok(Some(Room))`: Room found
    /// - `Ok(None)`: No room with that number
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_room_number(&self, room_number: i32) -> Result<Option<Room>, DbErr> {
        let room = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomNumber.eq(room_number))
            .one(self.db)
            .await?;

        Ok(room.map(Room::from_entity))
    }

    /// Gets all rooms, unordered
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)`: All rooms (empty if none exist)
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let rooms = entity::prelude::Room::find().all(self.db).await?;

        Ok(rooms.into_iter().map(Room::from_entity).collect())
    }

    /// Updates a room with the fields present in the mask
    ///
    /// Fields set to `None` in the mask are left at their stored values.
    ///
    /// # Arguments
    /// - `id`: Room ID
    /// - `params`: Field mask of values to change
    ///
    /// # Returns
    /// - `Ok(Room)`: The updated room
    /// - `Err(DbErr)`: Database error, `RecordNotFound` if the ID does not resolve
    pub async fn update(&self, id: i32, params: UpdateRoomParams) -> Result<Room, DbErr> {
        let room = entity::prelude::Room::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Room {} not found", id)))?;

        let mut active_model: entity::room::ActiveModel = room.into();

        if let Some(room_number) = params.room_number {
            active_model.room_number = ActiveValue::Set(room_number);
        }
        if let Some(room_type) = params.room_type {
            active_model.room_type = ActiveValue::Set(room_type);
        }
        if let Some(price_per_night) = params.price_per_night {
            active_model.price_per_night = ActiveValue::Set(price_per_night);
        }
        if let Some(is_available) = params.is_available {
            active_model.is_available = ActiveValue::Set(is_available);
        }

        let updated_room = active_model.update(self.db).await?;

        Ok(Room::from_entity(updated_room))
    }

    /// Atomically claims an available room
    ///
    /// Compare-and-set on the availability flag: the UPDATE only matches a row
    /// whose flag is still true, so of two racing bookings exactly one sees a
    /// row affected.
    ///
    /// # Arguments
    /// - `id`: Room ID
    ///
    /// # Returns
    /// - `Ok(true)`: The room was available and is now marked occupied
    /// - `Ok(false)`: The room was already occupied or the ID does not resolve
    /// - `Err(DbErr)`: Database error
    pub async fn try_occupy(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::update_many()
            .filter(entity::room::Column::Id.eq(id))
            .filter(entity::room::Column::IsAvailable.eq(true))
            .col_expr(
                entity::room::Column::IsAvailable,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
