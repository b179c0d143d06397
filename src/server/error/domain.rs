//! Domain error kinds raised by the service layer.
//!
//! Each variant carries the ids involved so logs can say which entity and which
//! caller were affected, while the HTTP mapping only exposes a safe message.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::user::UserRole;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User {0} does not exist")]
    UserNotExist(i32),

    #[error("Project {0} does not exist")]
    ProjectNotExist(i32),

    #[error("Sprint {0} does not exist")]
    SprintNotExist(i32),

    #[error("Task {0} does not exist")]
    TaskNotExist(i32),

    /// Principal is not the manager of the project owning the target entity.
    #[error("User {user_id} does not manage project {project_id}")]
    UserNotManageProject { user_id: i32, project_id: i32 },

    /// Sprint dates are reversed or fall outside the project's range.
    #[error("Invalid sprint dates: {0}")]
    SprintDateInvalid(String),

    /// Project end date precedes its start date.
    #[error("Invalid project dates: {0}")]
    ProjectDateInvalid(String),

    /// User is not on the project's team.
    #[error("User {user_id} is not a member of project {project_id}")]
    UserNotInProject { user_id: i32, project_id: i32 },

    /// Unique constraint on `users.email` rejected the write.
    #[error("Email {0} is already registered")]
    EmailAlreadyExists(String),

    /// No candidate could be attached to the project's team.
    #[error(transparent)]
    TeamAssignment(#[from] TeamAssignmentError),
}

/// Why a candidate was refused for a team assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// No live user has the candidate id.
    NotFound,
    /// Only `TEAM_MEMBER` users can join a team.
    IneligibleRole(UserRole),
    /// Candidate already belongs to the team of the given project.
    AlreadyAssigned(i32),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "user does not exist"),
            Self::IneligibleRole(role) => {
                write!(f, "user has role {:?}, only team members can be assigned", role)
            }
            Self::AlreadyAssigned(project_id) => {
                write!(f, "user already belongs to project {}", project_id)
            }
        }
    }
}

/// A single refused candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMemberRejection {
    pub user_id: i32,
    pub reason: RejectionReason,
}

/// Every candidate refused by one team-assignment request.
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamAssignmentError {
    pub rejections: Vec<TeamMemberRejection>,
}

impl TeamAssignmentError {
    pub fn push(&mut self, user_id: i32, reason: RejectionReason) {
        self.rejections.push(TeamMemberRejection { user_id, reason });
    }

    pub fn is_empty(&self) -> bool {
        self.rejections.is_empty()
    }

    /// Returns `None` when no candidate was rejected.
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for TeamAssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .rejections
            .iter()
            .map(|r| format!("user {}: {}", r.user_id, r.reason))
            .collect();

        write!(f, "{}", messages.join("; "))
    }
}

/// Converts domain errors into HTTP responses.
///
/// - `*NotExist` → 404 Not Found
/// - `UserNotManageProject` → 403 Forbidden
/// - date, membership and team assignment failures → 400 Bad Request
/// - `EmailAlreadyExists` → 409 Conflict
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::UserNotExist(_) => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Self::ProjectNotExist(_) => (StatusCode::NOT_FOUND, "Project not found".to_string()),
            Self::SprintNotExist(_) => (StatusCode::NOT_FOUND, "Sprint not found".to_string()),
            Self::TaskNotExist(_) => (StatusCode::NOT_FOUND, "Task not found".to_string()),
            Self::UserNotManageProject { .. } => (
                StatusCode::FORBIDDEN,
                "Only the project's manager can perform this action".to_string(),
            ),
            Self::SprintDateInvalid(_)
            | Self::ProjectDateInvalid(_)
            | Self::UserNotInProject { .. }
            | Self::TeamAssignment(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::EmailAlreadyExists(_) => (
                StatusCode::CONFLICT,
                "An account with this email already exists".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
