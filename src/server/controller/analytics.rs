use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{analytics::AnalyticsSnapshotDto, api::ErrorDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::analytics::AnalyticsService,
        state::AppState,
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Compute a hotel-wide analytics snapshot.
///
/// Aggregates reservation, revenue, occupancy, and popularity statistics over
/// the whole database, persists the result as a new immutable row, and
/// returns it. Every call produces a fresh snapshot.
///
/// # Access Control
/// - `Admin` - Only admins can view analytics
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - The computed snapshot
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error, no snapshot persisted
#[utoipa::path(
    get,
    path = "/api/analytics",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "The computed snapshot", body = AnalyticsSnapshotDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn compute_analytics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let snapshot = AnalyticsService::new(&state.db).compute_snapshot().await?;

    Ok((StatusCode::OK, Json(snapshot.into_dto())))
}
