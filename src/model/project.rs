use chrono::{DateTime, NaiveDate, Utc};
use entity::project::ProjectStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{api::deserialize_some, user::UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub manager_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `ACTIVE`.
    pub status: Option<ProjectStatus>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProjectDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<NaiveDate>,
    /// `null` clears the end date, omitting the field leaves it unchanged.
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<NaiveDate>)]
    pub end_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedProjectsDto {
    pub projects: Vec<ProjectDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectQueryDto {
    /// Page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10)
    #[serde(default = "super::default_entries")]
    pub entries: u64,
    pub id: Option<i32>,
    /// Case-insensitive partial match on the project name.
    pub name: Option<String>,
    pub status: Option<ProjectStatus>,
    pub manager_id: Option<i32>,
    /// Earliest start date, in the configured date format.
    pub start_from: Option<String>,
    /// Latest start date, in the configured date format.
    pub start_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddTeamMembersDto {
    pub user_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RejectedMemberDto {
    pub user_id: i32,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamAssignmentDto {
    pub assigned: Vec<UserDto>,
    pub rejected: Vec<RejectedMemberDto>,
}
