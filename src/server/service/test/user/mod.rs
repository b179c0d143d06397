use crate::server::{
    error::{auth::AuthError, domain::DomainError, AppError},
    model::user::{CreateUserParams, UpdateUserParams},
    service::{token::TokenService, user::UserService},
};
use chrono::Duration;
use entity::user::UserRole;
use test_utils::{builder::TestBuilder, factory};

mod create_user;

fn signup(email: &str, password: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password: password.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        role: UserRole::TeamMember,
    }
}
