use crate::server::{
    data::project::ProjectRepository,
    model::project::{CreateProjectParams, ProjectFilter, UpdateProjectParams},
};
use chrono::NaiveDate;
use entity::project::ProjectStatus;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, project::ProjectFactory},
};

mod create;
mod get_paginated;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
