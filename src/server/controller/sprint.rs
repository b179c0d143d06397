use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        sprint::{SprintDto, UpdateSprintDto},
        task::{CreateTaskDto, TaskDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{sprint::UpdateSprintParams, task::CreateTaskParams},
        service::{sprint::SprintService, task::TaskService},
        state::AppState,
    },
};

/// Tag for grouping sprint endpoints in OpenAPI documentation
pub static SPRINT_TAG: &str = "sprint";

/// Get a sprint by ID.
///
/// # Access Control
/// - The manager of the sprint's project
#[utoipa::path(
    get,
    path = "/api/sprints/{sprint_id}",
    tag = SPRINT_TAG,
    params(
        ("sprint_id" = i32, Path, description = "Sprint ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved sprint", body = SprintDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Sprint not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_sprint(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sprint_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let sprint = SprintService::new(&state.db)
        .get_by_id(principal.user_id, sprint_id)
        .await?;

    Ok((StatusCode::OK, Json(sprint.into_dto())))
}

/// Update a sprint.
///
/// Dates after merging with the stored sprint are validated against the project.
///
/// # Access Control
/// - The manager of the sprint's project
#[utoipa::path(
    patch,
    path = "/api/sprints/{sprint_id}",
    tag = SPRINT_TAG,
    params(
        ("sprint_id" = i32, Path, description = "Sprint ID")
    ),
    request_body = UpdateSprintDto,
    responses(
        (status = 200, description = "Successfully updated sprint", body = SprintDto),
        (status = 400, description = "Invalid sprint dates", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Sprint not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_sprint(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sprint_id): Path<i32>,
    Json(payload): Json<UpdateSprintDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let sprint = SprintService::new(&state.db)
        .update(
            principal.user_id,
            sprint_id,
            UpdateSprintParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(sprint.into_dto())))
}

/// Delete a sprint.
///
/// # Access Control
/// - The manager of the sprint's project
#[utoipa::path(
    delete,
    path = "/api/sprints/{sprint_id}",
    tag = SPRINT_TAG,
    params(
        ("sprint_id" = i32, Path, description = "Sprint ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted sprint"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Sprint not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_sprint(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sprint_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    SprintService::new(&state.db)
        .delete(principal.user_id, sprint_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the sprint's tasks.
///
/// # Access Control
/// - The manager of the sprint's project
#[utoipa::path(
    get,
    path = "/api/sprints/{sprint_id}/tasks",
    tag = SPRINT_TAG,
    params(
        ("sprint_id" = i32, Path, description = "Sprint ID")
    ),
    responses(
        (status = 200, description = "Tasks of the sprint", body = Vec<TaskDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Sprint not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_sprint_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sprint_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let tasks = TaskService::new(&state.db)
        .find_by_sprint_id(principal.user_id, sprint_id)
        .await?;

    let dtos: Vec<TaskDto> = tasks.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a task in the sprint.
///
/// The task belongs to the sprint's project. Status defaults to `TO_DO` and
/// priority to `MEDIUM`.
///
/// # Access Control
/// - The manager of the sprint's project
#[utoipa::path(
    post,
    path = "/api/sprints/{sprint_id}/tasks",
    tag = SPRINT_TAG,
    params(
        ("sprint_id" = i32, Path, description = "Sprint ID")
    ),
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Successfully created task", body = TaskDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Sprint not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sprint_id): Path<i32>,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let task = TaskService::new(&state.db)
        .create(
            principal.user_id,
            sprint_id,
            CreateTaskParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}
