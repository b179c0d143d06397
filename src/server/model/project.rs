//! Project domain models and parameters.
//!
//! Provides the project domain model, parameter types for create/update/list
//! operations and the outcome type of a team assignment.

use chrono::{DateTime, NaiveDate, Utc};
use entity::project::ProjectStatus;

use crate::{
    model::project::{
        CreateProjectDto, PaginatedProjectsDto, ProjectDto, ProjectQueryDto, RejectedMemberDto,
        TeamAssignmentDto, UpdateProjectDto,
    },
    server::{
        error::{domain::TeamAssignmentError, AppError},
        model::user::User,
        util::parse::parse_optional_date,
    },
};

/// Project domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    /// Open-ended when `None`.
    pub end_date: Option<NaiveDate>,
    /// User holding the `ProjectManager` role that owns this project.
    pub manager_id: i32,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            status: entity.status,
            start_date: entity.start_date,
            end_date: entity.end_date,
            manager_id: entity.manager_id,
            created_at: entity.created_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> ProjectDto {
        ProjectDto {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            manager_id: self.manager_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a project.
///
/// The manager is never taken from the request body; the service sets it to the
/// authenticated caller.
#[derive(Debug, Clone)]
pub struct CreateProjectParams {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl CreateProjectParams {
    pub fn from_dto(dto: CreateProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            status: dto.status.unwrap_or(ProjectStatus::Active),
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}

/// Sparse project update.
///
/// `end_date` is doubly optional: `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
}

impl UpdateProjectParams {
    pub fn from_dto(dto: UpdateProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            status: dto.status,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// Filters for project listings.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub id: Option<i32>,
    /// Case-insensitive substring of the project name.
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub manager_id: Option<i32>,
    pub start_from: Option<NaiveDate>,
    pub start_to: Option<NaiveDate>,
}

impl ProjectFilter {
    /// Builds a filter from query parameters, parsing dates with `date_format`.
    pub fn from_dto(dto: &ProjectQueryDto, date_format: &str) -> Result<Self, AppError> {
        Ok(Self {
            id: dto.id,
            name: dto.name.clone(),
            status: dto.status,
            manager_id: dto.manager_id,
            start_from: parse_optional_date(dto.start_from.as_deref(), date_format)?,
            start_to: parse_optional_date(dto.start_to.as_deref(), date_format)?,
        })
    }
}

/// One page of projects.
#[derive(Debug, Clone)]
pub struct PaginatedProjects {
    pub projects: Vec<Project>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProjects {
    pub fn into_dto(self) -> PaginatedProjectsDto {
        PaginatedProjectsDto {
            projects: self.projects.into_iter().map(Project::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Outcome of attaching candidates to a project's team.
///
/// Assignment is partial: valid candidates are attached even when others are
/// refused, and every refusal is reported in `rejected`.
#[derive(Debug, Clone)]
pub struct TeamAssignment {
    pub assigned: Vec<User>,
    pub rejected: Option<TeamAssignmentError>,
}

impl TeamAssignment {
    pub fn into_dto(self) -> TeamAssignmentDto {
        let rejected = self
            .rejected
            .map(|err| {
                err.rejections
                    .into_iter()
                    .map(|r| RejectedMemberDto {
                        user_id: r.user_id,
                        reason: r.reason.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        TeamAssignmentDto {
            assigned: self.assigned.into_iter().map(User::into_dto).collect(),
            rejected,
        }
    }
}
