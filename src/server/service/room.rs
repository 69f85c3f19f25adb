use sea_orm::DatabaseConnection;

use crate::server::{
    data::room::RoomRepository,
    error::AppError,
    model::room::{CreateRoomParams, Room, UpdateRoomParams},
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a new room to the inventory, initially available
    ///
    /// # Arguments
    /// - `params`: Room number, type, and nightly rate
    ///
    /// # Returns
    /// - `Ok(Room)`: The created room
    /// - `Err(AppError::InvalidArgument)`: Nightly rate is not positive
    /// - `Err(AppError::Conflict)`: Room number is already taken
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        if params.price_per_night <= 0.0 {
            return Err(AppError::InvalidArgument(
                "Price per night must be positive".to_string(),
            ));
        }

        if repo
            .find_by_room_number(params.room_number)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("Room number already exists".to_string()));
        }

        Ok(repo.create(params).await?)
    }

    /// Updates a room with the fields present in the mask
    ///
    /// Changing the nightly rate leaves existing reservations untouched; their
    /// cost was fixed at booking time.
    ///
    /// # Arguments
    /// - `id`: Room ID
    /// - `params`: Field mask of values to change
    ///
    /// # Returns
    /// - `Ok(Room)`: The updated room
    /// - `Err(AppError::NotFound)`: No room with that ID
    /// - `Err(AppError)`: Database error
    pub async fn update(&self, id: i32, params: UpdateRoomParams) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Room not found".to_string()));
        }

        Ok(repo.update(id, params).await?)
    }

    /// Gets all rooms
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)`: All rooms (empty if none exist)
    /// - `Err(AppError)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        let repo = RoomRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
