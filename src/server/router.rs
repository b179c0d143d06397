use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{auth, project, sprint, task, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Taskboard API"),
    paths(
        auth::signup,
        auth::login,
        auth::me,
        auth::my_tasks,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        project::create_project,
        project::get_projects,
        project::get_project,
        project::update_project,
        project::delete_project,
        project::get_team_members,
        project::add_team_members,
        project::remove_team_member,
        project::get_project_sprints,
        project::create_sprint,
        project::get_project_tasks,
        sprint::get_sprint,
        sprint::update_sprint,
        sprint::delete_sprint,
        sprint::get_sprint_tasks,
        sprint::create_task,
        task::get_task,
        task::update_task,
        task::delete_task,
        task::assign_task,
    ),
    modifiers(&BearerAuth)
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/openapi.json", get(openapi))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/me/tasks", get(auth::my_tasks))
        .route("/api/users", get(user::get_users))
        .route(
            "/api/users/{user_id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/projects",
            post(project::create_project).get(project::get_projects),
        )
        .route(
            "/api/projects/{project_id}",
            get(project::get_project)
                .patch(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/api/projects/{project_id}/members",
            get(project::get_team_members).post(project::add_team_members),
        )
        .route(
            "/api/projects/{project_id}/members/{user_id}",
            delete(project::remove_team_member),
        )
        .route(
            "/api/projects/{project_id}/sprints",
            get(project::get_project_sprints).post(project::create_sprint),
        )
        .route(
            "/api/projects/{project_id}/tasks",
            get(project::get_project_tasks),
        )
        .route(
            "/api/sprints/{sprint_id}",
            get(sprint::get_sprint)
                .patch(sprint::update_sprint)
                .delete(sprint::delete_sprint),
        )
        .route(
            "/api/sprints/{sprint_id}/tasks",
            get(sprint::get_sprint_tasks).post(sprint::create_task),
        )
        .route(
            "/api/tasks/{task_id}",
            get(task::get_task)
                .patch(task::update_task)
                .delete(task::delete_task),
        )
        .route("/api/tasks/{task_id}/assignee", put(task::assign_task))
}
