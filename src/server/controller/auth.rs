use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{RegisterUserParams, Role},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new staff account.
///
/// Creates an account with the given username, password, and role. The role
/// defaults to "user" when omitted; "admin" accounts can additionally manage
/// rooms, the room service catalog, and analytics. The new account is not
/// logged in; call the login endpoint next.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (username, password, optional role)
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Username already exists or unknown role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = MessageDto),
        (status = 400, description = "Username already exists or unknown role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let role = match payload.role.as_deref() {
        None => Role::User,
        Some(raw) => Role::parse(raw)
            .ok_or_else(|| AppError::InvalidArgument(format!("Unknown role '{}'", raw)))?,
    };

    AuthService::new(&state.db)
        .register(RegisterUserParams {
            username: payload.username,
            password: payload.password,
            role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Log in with username and password.
///
/// Verifies the credentials against the stored password digest and stores the
/// account id in the session cookie. Subsequent requests ride on that cookie.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to log the account into
/// - `payload` - Login credentials
///
/// # Returns
/// - `200 OK` - Logged in, returns the account
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .authenticate(&payload.username, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out the current session.
///
/// Clears all session state. Succeeds whether or not anyone was logged in.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `session` - Session to clear
///
/// # Returns
/// - `200 OK` - Session cleared
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the currently authenticated account.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - The authenticated account
/// - `401 Unauthorized` - Not logged in or stale session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated account", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
