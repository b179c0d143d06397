use crate::server::{
    data::sprint::SprintRepository,
    model::sprint::{CreateSprintParams, UpdateSprintParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_sprint_with_dependencies};

mod create;
mod delete;
mod find_with_project;
mod update;
