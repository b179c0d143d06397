use crate::server::{
    error::{
        domain::{DomainError, RejectionReason},
        AppError,
    },
    model::project::{CreateProjectParams, UpdateProjectParams},
    service::project::ProjectService,
};
use chrono::NaiveDate;
use entity::{project::ProjectStatus, user::UserRole};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self,
        helpers::{create_project_with_manager, create_sprint_with_dependencies},
        user::UserFactory,
    },
};

mod add_team_members;
mod delete;
mod remove_team_member;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
