use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UserChanges, UserFilter},
};
use entity::user::UserRole;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::UserFactory},
};

mod create;
mod delete;
mod find_credentials_by_email;
mod update;
