use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        transaction::{CreateTransactionDto, TransactionDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::transaction::CreateTransactionParams,
        service::transaction::TransactionService,
        state::AppState,
    },
};

/// Tag for grouping transaction endpoints in OpenAPI documentation
pub static TRANSACTION_TAG: &str = "transaction";

/// Record a payment against a reservation.
///
/// Appends a transaction to the ledger with a server-side timestamp.
/// Transactions are never updated or deleted.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Transaction data (reservation, amount, payment method)
///
/// # Returns
/// - `201 Created` - Successfully recorded transaction
/// - `400 Bad Request` - Amount is not positive
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Reservation does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Successfully recorded transaction", body = TransactionDto),
        (status = 400, description = "Amount is not positive", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Reservation does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let transaction = TransactionService::new(&state.db)
        .create(CreateTransactionParams {
            reservation_id: payload.reservation_id,
            amount: payload.amount,
            payment_method: payload.payment_method,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

/// Get all transactions.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - List of all transactions
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    responses(
        (status = 200, description = "List of all transactions", body = Vec<TransactionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let transactions = TransactionService::new(&state.db).get_all().await?;

    let dtos: Vec<TransactionDto> = transactions
        .into_iter()
        .map(|transaction| transaction.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
