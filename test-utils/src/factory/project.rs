//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::project::ProjectStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects.
///
/// Defaults to an `Active` project starting 2024-01-01 with no end date.
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    manager_id: i32,
    name: String,
    description: String,
    status: ProjectStatus,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory managed by `manager_id`.
    pub fn new(db: &'a DatabaseConnection, manager_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            manager_id,
            name: format!("Project {}", id),
            description: String::new(),
            status: ProjectStatus::Active,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            manager_id: ActiveValue::Set(self.manager_id),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values managed by `manager_id`.
pub async fn create_project(
    db: &DatabaseConnection,
    manager_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, manager_id).build().await
}
