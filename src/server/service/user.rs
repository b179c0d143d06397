use entity::user::UserRole;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, domain::DomainError, AppError},
    model::{
        auth::AccessToken,
        total_pages,
        user::{CreateUserParams, PaginatedUsers, UpdateUserParams, User, UserChanges, UserFilter},
    },
    service::{
        password::{hash_password, verify_password},
        token::TokenService,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::BadRequest)` - Signup requested the `Admin` role
    /// - `Err(AuthError::PasswordTooLong)` - Password over the hasher limit
    /// - `Err(DomainError::EmailAlreadyExists)` - Email is taken
    pub async fn create_user(&self, params: CreateUserParams) -> Result<User, AppError> {
        if params.role == UserRole::Admin {
            return Err(AppError::BadRequest(
                "Administrator accounts cannot be created through signup".to_string(),
            ));
        }

        let password_hash = hash_password(&params.password)?;
        let email = params.email.clone();

        let user = UserRepository::new(self.db)
            .create(params, password_hash)
            .await
            .map_err(|e| email_conflict(e, &email))?;

        tracing::info!("Created user {} with role {:?}", user.id, user.role);

        Ok(user)
    }

    /// Checks credentials and issues an access token.
    ///
    /// # Returns
    /// - `Ok(AccessToken)` - Signed token for the user
    /// - `Err(AuthError::EmailNotExist)` - No live user has that email
    /// - `Err(AuthError::PasswordIncorrect)` - Password does not match
    pub async fn login(
        &self,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<AccessToken, AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
        else {
            return Err(AuthError::EmailNotExist(email.to_string()).into());
        };

        if !verify_password(password, &credentials.password_hash) {
            return Err(AuthError::PasswordIncorrect(credentials.user.id).into());
        }

        tokens.issue(credentials.user.id, credentials.user.role)
    }

    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UserNotExist(id).into())
    }

    pub async fn get_paginated(
        &self,
        filter: UserFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_paginated(&filter, page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Applies a sparse profile update.
    ///
    /// An empty update returns the current record without writing. A new password
    /// is hashed before storage.
    pub async fn update_user(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        if params.is_empty() {
            return self.get_user(id).await;
        }

        let password_hash = params
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;
        let email = params.email.clone();

        let changes = UserChanges {
            email: params.email,
            password_hash,
            first_name: params.first_name,
            last_name: params.last_name,
            role: params.role,
        };

        let updated = UserRepository::new(self.db)
            .update(id, changes)
            .await
            .map_err(|e| match &email {
                Some(email) => email_conflict(e, email),
                None => e.into(),
            })?;

        updated.ok_or_else(|| DomainError::UserNotExist(id).into())
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        let affected = UserRepository::new(self.db).delete(id).await?;

        if affected == 0 {
            return Err(DomainError::UserNotExist(id).into());
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}

/// Maps a unique violation on `users.email` to `EmailAlreadyExists`.
fn email_conflict(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::EmailAlreadyExists(email.to_string()).into()
        }
        _ => err.into(),
    }
}
