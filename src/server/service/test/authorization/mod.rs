use crate::server::{
    error::{domain::DomainError, AppError},
    model::{project::Project, sprint::Sprint, task::Task},
    service::authorization::AuthorizationResolver,
};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_task_with_dependencies};
