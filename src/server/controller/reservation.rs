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
        reservation::{BillDto, CreateReservationDto, ReservationDto, UpdateReservationDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::reservation::{CreateReservationParams, UpdateReservationParams},
        service::{billing::BillingService, reservation::ReservationService},
        state::AppState,
    },
};

/// Tag for grouping reservation endpoints in OpenAPI documentation
pub static RESERVATION_TAG: &str = "reservation";

/// Book a room for a customer.
///
/// Creates a reservation for the given date range. The total cost is derived
/// from the number of nights and the room's nightly rate; the booked room is
/// marked unavailable. The reservation and the availability flip commit
/// together or not at all.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Reservation data (customer, room, check-in and check-out dates)
///
/// # Returns
/// - `201 Created` - Successfully created reservation
/// - `400 Bad Request` - Room unavailable or check-out not after check-in
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Customer or room does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    request_body = CreateReservationDto,
    responses(
        (status = 201, description = "Successfully created reservation", body = ReservationDto),
        (status = 400, description = "Room unavailable or invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Customer or room does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .create(CreateReservationParams {
            customer_id: payload.customer_id,
            room_id: payload.room_id,
            check_in_date: payload.check_in_date,
            check_out_date: payload.check_out_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// Get all reservations.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - List of all reservations
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = RESERVATION_TAG,
    responses(
        (status = 200, description = "List of all reservations", body = Vec<ReservationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservations = ReservationService::new(&state.db).get_all().await?;

    let dtos: Vec<ReservationDto> = reservations
        .into_iter()
        .map(|reservation| reservation.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Update a reservation.
///
/// Applies the fields present in the payload and leaves the rest untouched.
/// The effective date range is re-validated and the total cost is recomputed
/// from the effective room's nightly rate. Room availability flags are not
/// reassigned by updates.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `reservation_id` - Reservation ID to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - Successfully updated reservation
/// - `400 Bad Request` - Effective check-out not after check-in
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Reservation, customer, or room does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/reservations/{reservation_id}",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    request_body = UpdateReservationDto,
    responses(
        (status = 200, description = "Successfully updated reservation", body = ReservationDto),
        (status = 400, description = "Invalid effective date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Reservation, customer, or room does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
    Json(payload): Json<UpdateReservationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let reservation = ReservationService::new(&state.db)
        .update(
            reservation_id,
            UpdateReservationParams {
                customer_id: payload.customer_id,
                room_id: payload.room_id,
                check_in_date: payload.check_in_date,
                check_out_date: payload.check_out_date,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Get the bill for a reservation.
///
/// Returns the room cost plus the total of every room service order placed
/// against the reservation, computed from current state on every call.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `reservation_id` - Reservation ID to bill
///
/// # Returns
/// - `200 OK` - Total owed for the stay so far
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Reservation does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/reservations/{reservation_id}/bill",
    tag = RESERVATION_TAG,
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Total owed for the stay so far", body = BillDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Reservation does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reservation_bill(
    State(state): State<AppState>,
    session: Session,
    Path(reservation_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let total_cost = BillingService::new(&state.db)
        .compute_bill(reservation_id)
        .await?;

    Ok((StatusCode::OK, Json(BillDto { total_cost })))
}
