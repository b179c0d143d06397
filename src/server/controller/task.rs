use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        task::{AssignTaskDto, TaskDto, UpdateTaskDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::task::UpdateTaskParams,
        service::task::TaskService, state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// Get a task by ID.
///
/// # Access Control
/// - The manager of the task's project
#[utoipa::path(
    get,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved task", body = TaskDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let task = TaskService::new(&state.db)
        .get_by_id(principal.user_id, task_id)
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Update a task.
///
/// Any status may follow any other. `due_date: null` clears the due date.
///
/// # Access Control
/// - The manager of the task's project
#[utoipa::path(
    patch,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Successfully updated task", body = TaskDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<i32>,
    Json(payload): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let task = TaskService::new(&state.db)
        .update(
            principal.user_id,
            task_id,
            UpdateTaskParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Delete a task.
///
/// # Access Control
/// - The manager of the task's project
#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted task"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    TaskService::new(&state.db)
        .delete(principal.user_id, task_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign a task.
///
/// The assignee must be on the project's team or be its manager.
///
/// # Access Control
/// - The manager of the task's project
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}/assignee",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = AssignTaskDto,
    responses(
        (status = 200, description = "Successfully assigned task", body = TaskDto),
        (status = 400, description = "Assignee is not part of the project", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Task or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn assign_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(task_id): Path<i32>,
    Json(payload): Json<AssignTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let task = TaskService::new(&state.db)
        .assign(principal.user_id, task_id, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}
