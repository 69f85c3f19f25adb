use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        room::{CreateRoomDto, RoomDto, UpdateRoomDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room::{CreateRoomParams, UpdateRoomParams},
        service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Add a room to the inventory.
///
/// Creates a room with a unique room number, a type, and a nightly rate. New
/// rooms start out available.
///
/// # Access Control
/// - `Admin` - Only admins can manage the room inventory
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Room creation data
///
/// # Returns
/// - `201 Created` - Successfully created room
/// - `400 Bad Request` - Duplicate room number or non-positive rate
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Successfully created room", body = RoomDto),
        (status = 400, description = "Duplicate room number or non-positive rate", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let room = RoomService::new(&state.db)
        .create(CreateRoomParams {
            room_number: payload.room_number,
            room_type: payload.room_type,
            price_per_night: payload.price_per_night,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// Get all rooms.
///
/// Returns every room with its current availability flag.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - List of all rooms
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "List of all rooms", body = Vec<RoomDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rooms = RoomService::new(&state.db).get_all().await?;

    let dtos: Vec<RoomDto> = rooms.into_iter().map(|room| room.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Update a room.
///
/// Applies the fields present in the payload and leaves the rest untouched.
/// Setting `is_available` here does not touch existing reservations.
///
/// # Access Control
/// - `Admin` - Only admins can manage the room inventory
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `room_id` - Room ID to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Successfully updated room
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Room does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/rooms/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Successfully updated room", body = RoomDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Room does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let room = RoomService::new(&state.db)
        .update(
            room_id,
            UpdateRoomParams {
                room_number: payload.room_number,
                room_type: payload.room_type,
                price_per_night: payload.price_per_night,
                is_available: payload.is_available,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}
