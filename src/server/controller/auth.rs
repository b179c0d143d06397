use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        task::TaskDto,
        user::{LoginDto, SignupDto, TokenDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::CreateUserParams,
        service::{task::TaskService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Accounts may be created as `PROJECT_MANAGER` or `TEAM_MEMBER`; `TEAM_MEMBER` is
/// used when no role is given. Admin accounts cannot be created through signup.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Admin role requested or password too long
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .create_user(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Exchange credentials for a bearer token.
///
/// An unknown email and a wrong password produce the same response.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Signed access token
/// - `401 Unauthorized` - Email or password is incorrect
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Access token issued", body = TokenDto),
        (status = 401, description = "Email or password is incorrect", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let token = service
        .login(&state.tokens, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(token.into_dto())))
}

/// Get the authenticated user's profile.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User no longer exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let user = UserService::new(&state.db)
        .get_user(principal.user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List tasks assigned to the authenticated user.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/me/tasks",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Tasks assigned to the caller", body = Vec<TaskDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn my_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let tasks = TaskService::new(&state.db)
        .find_assigned_to(principal.user_id)
        .await?;

    let dtos: Vec<TaskDto> = tasks.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
