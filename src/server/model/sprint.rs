//! Sprint domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::sprint::{CreateSprintDto, SprintDto, UpdateSprintDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Sprint {
    pub id: i32,
    pub name: String,
    pub goal: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub project_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Sprint {
    pub fn from_entity(entity: entity::sprint::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            goal: entity.goal,
            start_date: entity.start_date,
            end_date: entity.end_date,
            project_id: entity.project_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SprintDto {
        SprintDto {
            id: self.id,
            name: self.name,
            goal: self.goal,
            start_date: self.start_date,
            end_date: self.end_date,
            project_id: self.project_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a sprint. The owning project comes from the route.
#[derive(Debug, Clone)]
pub struct CreateSprintParams {
    pub name: String,
    pub goal: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CreateSprintParams {
    pub fn from_dto(dto: CreateSprintDto) -> Self {
        Self {
            name: dto.name,
            goal: dto.goal,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSprintParams {
    pub name: Option<String>,
    pub goal: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl UpdateSprintParams {
    pub fn from_dto(dto: UpdateSprintDto) -> Self {
        Self {
            name: dto.name,
            goal: dto.goal,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.goal.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}
