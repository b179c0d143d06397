//! User domain models and parameters.
//!
//! Provides the domain model for user accounts plus parameter types for signup,
//! sparse profile updates and filtered listings.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::model::user::{PaginatedUsersDto, SignupDto, UpdateUserDto, UserDto, UserQueryDto};

/// User account without credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    /// Project whose team the user belongs to, if any.
    pub current_project_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The password hash is dropped; use [`UserCredentials`] where it is needed.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
            first_name: entity.first_name,
            last_name: entity.last_name,
            current_project_id: entity.current_project_id,
            created_at: entity.created_at,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            role: self.role,
            first_name: self.first_name,
            last_name: self.last_name,
            current_project_id: self.current_project_id,
            created_at: self.created_at,
        }
    }
}

/// User together with their stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    /// Plain-text password, hashed by the service before it reaches storage.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

impl CreateUserParams {
    /// Converts a signup DTO, defaulting the role to `TeamMember`.
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
            role: dto.role.unwrap_or(UserRole::TeamMember),
        }
    }
}

/// Sparse profile update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
            role: dto.role,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.role.is_none()
    }
}

/// Column values written by a sparse user update.
///
/// Same shape as [`UpdateUserParams`] but with the password already hashed.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<UserRole>,
}

/// Filters for user listings. All set filters must match.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub id: Option<i32>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub project_id: Option<i32>,
}

impl UserFilter {
    pub fn from_dto(dto: &UserQueryDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email.clone(),
            name: dto.name.clone(),
            role: dto.role,
            project_id: dto.project_id,
        }
    }
}

/// One page of users.
#[derive(Debug, Clone)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
