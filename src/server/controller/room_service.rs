use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        room_service::{
            CreateRoomServiceItemDto, CreateRoomServiceOrderDto, RoomServiceItemDto,
            RoomServiceOrderDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room_service::{
            CreateRoomServiceItemParams, CreateRoomServiceOrderParams, OrderLine,
        },
        service::room_service::{RoomServiceItemService, RoomServiceOrderService},
        state::AppState,
    },
};

/// Tag for grouping room service endpoints in OpenAPI documentation
pub static ROOM_SERVICE_TAG: &str = "room_service";

/// Add an item to the room service catalog.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Item data (name, optional description, price)
///
/// # Returns
/// - `201 Created` - Successfully created catalog item
/// - `400 Bad Request` - Price is not positive
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/room-services/items",
    tag = ROOM_SERVICE_TAG,
    request_body = CreateRoomServiceItemDto,
    responses(
        (status = 201, description = "Successfully created catalog item", body = RoomServiceItemDto),
        (status = 400, description = "Price is not positive", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room_service_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomServiceItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let item = RoomServiceItemService::new(&state.db)
        .create(CreateRoomServiceItemParams {
            name: payload.name,
            description: payload.description,
            price: payload.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Get the room service catalog.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - List of all catalog items
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/room-services/items",
    tag = ROOM_SERVICE_TAG,
    responses(
        (status = 200, description = "List of all catalog items", body = Vec<RoomServiceItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_service_items(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = RoomServiceItemService::new(&state.db).get_all().await?;

    let dtos: Vec<RoomServiceItemDto> = items.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Place a room service order.
///
/// Orders catalog items against a reservation. The order total is derived
/// from catalog prices and quantities; the order and its lines persist
/// together or not at all.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Order data (reservation and item/quantity lines)
///
/// # Returns
/// - `201 Created` - Successfully created order
/// - `400 Bad Request` - A line has a non-positive quantity
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Reservation or an ordered item does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/room-services/orders",
    tag = ROOM_SERVICE_TAG,
    request_body = CreateRoomServiceOrderDto,
    responses(
        (status = 201, description = "Successfully created order", body = RoomServiceOrderDto),
        (status = 400, description = "A line has a non-positive quantity", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Reservation or an ordered item does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room_service_order(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomServiceOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lines = payload
        .items
        .into_iter()
        .map(|line| OrderLine {
            item_id: line.item_id,
            quantity: line.quantity,
        })
        .collect();

    let order = RoomServiceOrderService::new(&state.db)
        .create(CreateRoomServiceOrderParams {
            reservation_id: payload.reservation_id,
            lines,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get all room service orders.
///
/// Returns every order together with its lines.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - List of all orders
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/room-services/orders",
    tag = ROOM_SERVICE_TAG,
    responses(
        (status = 200, description = "List of all orders", body = Vec<RoomServiceOrderDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_service_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let orders = RoomServiceOrderService::new(&state.db).get_all().await?;

    let dtos: Vec<RoomServiceOrderDto> = orders.into_iter().map(|order| order.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
