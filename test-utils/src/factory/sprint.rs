//! Sprint factory for creating test sprint entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sprints.
///
/// Defaults to a two-week sprint starting 2024-01-08.
pub struct SprintFactory<'a> {
    db: &'a DatabaseConnection,
    project_id: i32,
    name: String,
    goal: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> SprintFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, project_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            project_id,
            name: format!("Sprint {}", id),
            goal: String::new(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 21).unwrap(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the sprint entity into the database.
    pub async fn build(self) -> Result<entity::sprint::Model, DbErr> {
        entity::sprint::ActiveModel {
            name: ActiveValue::Set(self.name),
            goal: ActiveValue::Set(self.goal),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            project_id: ActiveValue::Set(self.project_id),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sprint with default values inside `project_id`.
pub async fn create_sprint(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::sprint::Model, DbErr> {
    SprintFactory::new(db, project_id).build().await
}
