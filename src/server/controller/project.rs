use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        project::{
            AddTeamMembersDto, CreateProjectDto, PaginatedProjectsDto, ProjectDto, ProjectQueryDto,
            TeamAssignmentDto, UpdateProjectDto,
        },
        sprint::{CreateSprintDto, SprintDto},
        task::{TaskDto, TaskQueryDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            project::{CreateProjectParams, ProjectFilter, UpdateProjectParams},
            sprint::CreateSprintParams,
            task::TaskFilter,
        },
        service::{project::ProjectService, sprint::SprintService, task::TaskService},
        state::AppState,
        util::parse::parse_pagination,
    },
};

/// Tag for grouping project endpoints in OpenAPI documentation
pub static PROJECT_TAG: &str = "project";

/// Create a project managed by the caller.
///
/// The caller becomes the project's manager; a manager ID cannot be supplied.
///
/// # Access Control
/// - `ProjectManager` - Only project managers can create projects
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Project name, description, status and dates
///
/// # Returns
/// - `201 Created` - Successfully created project
/// - `400 Bad Request` - End date before start date
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not a project manager
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = PROJECT_TAG,
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Successfully created project", body = ProjectDto),
        (status = 400, description = "Invalid project data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not a project manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal =
        AuthGuard::new(&state.tokens, &headers).require(&[Permission::ProjectManager])?;

    let project = ProjectService::new(&state.db)
        .create(principal.user_id, CreateProjectParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(project.into_dto())))
}

/// Get paginated projects.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `params` - Pagination and filters; start-date bounds use the configured date format
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = PROJECT_TAG,
    params(ProjectQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved projects", body = PaginatedProjectsDto),
        (status = 400, description = "Malformed date filter or pagination", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_projects(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ProjectQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let filter = ProjectFilter::from_dto(&params, &state.date_format)?;
    let (page, entries) = parse_pagination(params.page, params.entries)?;
    let projects = ProjectService::new(&state.db)
        .get_paginated(filter, page, entries)
        .await?;

    Ok((StatusCode::OK, Json(projects.into_dto())))
}

/// Get a project by ID.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved project", body = ProjectDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let project = ProjectService::new(&state.db).get_by_id(project_id).await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Update a project.
///
/// Only the fields present in the body are written; `end_date: null` clears the
/// end date.
///
/// # Access Control
/// - The project's manager
#[utoipa::path(
    patch,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Successfully updated project", body = ProjectDto),
        (status = 400, description = "Invalid project dates", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<i32>,
    Json(payload): Json<UpdateProjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let project = ProjectService::new(&state.db)
        .update(
            principal.user_id,
            project_id,
            UpdateProjectParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::OK, Json(project.into_dto())))
}

/// Delete a project and release its team.
///
/// Sprints and tasks of the project are kept.
///
/// # Access Control
/// - The project's manager
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted project"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_project(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    ProjectService::new(&state.db)
        .delete(principal.user_id, project_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the project's team members.
///
/// # Access Control
/// - The project's manager
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/members",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Team members", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let members = ProjectService::new(&state.db)
        .get_team_members(principal.user_id, project_id)
        .await?;

    let dtos: Vec<UserDto> = members.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Add users to the project's team.
///
/// Candidates must exist, have the `TEAM_MEMBER` role and not belong to another
/// project. Eligible candidates are assigned even when others are rejected; the
/// response lists both. The request fails only when nobody could be assigned.
///
/// # Access Control
/// - The project's manager
///
/// # Returns
/// - `200 OK` - Assigned users and per-candidate rejections
/// - `400 Bad Request` - Every candidate was rejected
/// - `403 Forbidden` - Caller does not manage the project
/// - `404 Not Found` - Project not found
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/members",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    request_body = AddTeamMembersDto,
    responses(
        (status = 200, description = "Assignment outcome", body = TeamAssignmentDto),
        (status = 400, description = "No candidate could be assigned", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn add_team_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<i32>,
    Json(payload): Json<AddTeamMembersDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let outcome = ProjectService::new(&state.db)
        .add_team_members(principal.user_id, project_id, &payload.user_ids)
        .await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}

/// Remove a user from the project's team.
///
/// # Access Control
/// - The project's manager
#[utoipa::path(
    delete,
    path = "/api/projects/{project_id}/members/{user_id}",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        ("user_id" = i32, Path, description = "Team member's user ID")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 400, description = "User is not on the team", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn remove_team_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((project_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    ProjectService::new(&state.db)
        .remove_team_member(principal.user_id, project_id, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the project's sprints ordered by start date.
///
/// # Access Control
/// - The project's manager
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/sprints",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Sprints of the project", body = Vec<SprintDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_project_sprints(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let sprints = SprintService::new(&state.db)
        .find_by_project_id(principal.user_id, project_id)
        .await?;

    let dtos: Vec<SprintDto> = sprints.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a sprint in the project.
///
/// The sprint may not start before the project starts or after it ends. Its end
/// date is only required to follow its own start.
///
/// # Access Control
/// - The project's manager
#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/sprints",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID")
    ),
    request_body = CreateSprintDto,
    responses(
        (status = 201, description = "Successfully created sprint", body = SprintDto),
        (status = 400, description = "Invalid sprint dates", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_sprint(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<i32>,
    Json(payload): Json<CreateSprintDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let sprint = SprintService::new(&state.db)
        .create(
            principal.user_id,
            project_id,
            CreateSprintParams::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(sprint.into_dto())))
}

/// List the project's tasks.
///
/// # Access Control
/// - The project's manager
///
/// # Arguments
/// - `params` - Filters by status, priority, assignee and due-date bounds
#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/tasks",
    tag = PROJECT_TAG,
    params(
        ("project_id" = i32, Path, description = "Project ID"),
        TaskQueryDto
    ),
    responses(
        (status = 200, description = "Tasks of the project", body = Vec<TaskDto>),
        (status = 400, description = "Malformed date filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller does not manage the project", body = ErrorDto),
        (status = 404, description = "Project not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn get_project_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(project_id): Path<i32>,
    Query(params): Query<TaskQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let filter = TaskFilter::from_dto(&params, &state.date_format)?;
    let tasks = TaskService::new(&state.db)
        .find_by_project_id(principal.user_id, project_id, filter)
        .await?;

    let dtos: Vec<TaskDto> = tasks.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
