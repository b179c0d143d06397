//! Task domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::task::{TaskPriority, TaskStatus};

use crate::{
    model::task::{CreateTaskDto, TaskDto, TaskQueryDto, UpdateTaskDto},
    server::{error::AppError, util::parse::parse_optional_date},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub project_id: i32,
    pub sprint_id: Option<i32>,
    pub assignee_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            status: entity.status,
            priority: entity.priority,
            due_date: entity.due_date,
            project_id: entity.project_id,
            sprint_id: entity.sprint_id,
            assignee_id: entity.assignee_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            project_id: self.project_id,
            sprint_id: self.sprint_id,
            assignee_id: self.assignee_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a task inside a sprint.
///
/// Carries no project or sprint id; both are copied from the resolved sprint.
#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

impl CreateTaskParams {
    pub fn from_dto(dto: CreateTaskDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            status: dto.status.unwrap_or(TaskStatus::ToDo),
            priority: dto.priority.unwrap_or(TaskPriority::Medium),
            due_date: dto.due_date,
        }
    }
}

/// Sparse task update. `due_date: Some(None)` clears the due date.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl UpdateTaskParams {
    pub fn from_dto(dto: UpdateTaskDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            status: dto.status,
            priority: dto.priority,
            due_date: dto.due_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

/// Filters for task listings within a project.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<i32>,
    pub due_from: Option<NaiveDate>,
    pub due_to: Option<NaiveDate>,
}

impl TaskFilter {
    /// Builds a filter from query parameters, parsing dates with `date_format`.
    pub fn from_dto(dto: &TaskQueryDto, date_format: &str) -> Result<Self, AppError> {
        Ok(Self {
            status: dto.status,
            priority: dto.priority,
            assignee_id: dto.assignee_id,
            due_from: parse_optional_date(dto.due_from.as_deref(), date_format)?,
            due_to: parse_optional_date(dto.due_to.as_deref(), date_format)?,
        })
    }
}
