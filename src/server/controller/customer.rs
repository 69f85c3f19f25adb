use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CustomerDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::customer::CreateCustomerParams,
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

/// Create a new customer.
///
/// Registers a customer profile with name, email, and phone number. The email
/// must not already be registered.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Customer creation data
///
/// # Returns
/// - `201 Created` - Successfully created customer
/// - `400 Bad Request` - Email already registered
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Successfully created customer", body = CustomerDto),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let customer = CustomerService::new(&state.db)
        .create(CreateCustomerParams {
            name: payload.name,
            email: payload.email,
            phone_number: payload.phone_number,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

/// Get all customers.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - List of all customers
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "List of all customers", body = Vec<CustomerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let customers = CustomerService::new(&state.db).get_all().await?;

    let dtos: Vec<CustomerDto> = customers
        .into_iter()
        .map(|customer| customer.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
