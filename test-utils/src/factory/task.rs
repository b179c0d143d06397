//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::task::{TaskPriority, TaskStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks.
///
/// The factory writes `project_id` as given and does not check it against the
/// sprint, which lets tests build rows the service layer would never produce.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    project_id: i32,
    sprint_id: Option<i32>,
    assignee_id: Option<i32>,
    title: String,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: Option<NaiveDate>,
}

impl<'a> TaskFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, project_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            project_id,
            sprint_id: None,
            assignee_id: None,
            title: format!("Task {}", id),
            status: TaskStatus::ToDo,
            priority: TaskPriority::Medium,
            due_date: None,
        }
    }

    pub fn sprint_id(mut self, sprint_id: i32) -> Self {
        self.sprint_id = Some(sprint_id);
        self
    }

    pub fn assignee_id(mut self, assignee_id: i32) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Builds and inserts the task entity into the database.
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(String::new()),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            due_date: ActiveValue::Set(self.due_date),
            project_id: ActiveValue::Set(self.project_id),
            sprint_id: ActiveValue::Set(self.sprint_id),
            assignee_id: ActiveValue::Set(self.assignee_id),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values in `project_id`, outside any sprint.
pub async fn create_task(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, project_id).build().await
}
