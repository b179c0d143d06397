//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, credential lookup, sparse updates, filtered listings and
//! the `current_project_id` back-reference that models project team membership.

use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{
    sea_query::{Condition, Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{contains_pattern, soft_delete, SoftDelete},
    model::user::{CreateUserParams, User, UserChanges, UserCredentials, UserFilter},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to a connection or transaction and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Signup parameters; the plain-text password is ignored
    /// - `password_hash` - PHC-formatted hash of the user's password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(&self, params: CreateUserParams, password_hash: String) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(params.role),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            current_project_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a live user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No live user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_active_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a live user by email together with their password hash.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find_active()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(UserCredentials::from_entity))
    }

    /// Finds every live user whose ID is in `ids`. Missing IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find_active()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets a page of live users matching `filter`, ordered by ID.
    ///
    /// # Arguments
    /// - `filter` - Filters to apply; unset filters match everything
    /// - `page` - Zero-based page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users on the page and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &UserFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find_active();

        if let Some(id) = filter.id {
            query = query.filter(entity::user::Column::Id.eq(id));
        }
        if let Some(email) = &filter.email {
            query = query.filter(entity::user::Column::Email.eq(email.as_str()));
        }
        if let Some(name) = &filter.name {
            let pattern = contains_pattern(name);
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::user::Column::FirstName)))
                            .like(pattern.as_str()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::user::Column::LastName)))
                            .like(pattern.as_str()),
                    ),
            );
        }
        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }
        if let Some(project_id) = filter.project_id {
            query = query.filter(entity::user::Column::CurrentProjectId.eq(project_id));
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(User::from_entity).collect(), total))
    }

    /// Writes only the fields set in `changes`.
    ///
    /// Moving a user to any role other than `TeamMember` also clears their team
    /// membership in the same write.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user; unchanged user when `changes` is empty
    /// - `Ok(None)` - No live user with that ID
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<User>, DbErr> {
        let mut model = <entity::user::ActiveModel as ActiveModelTrait>::default();
        let mut dirty = false;

        if let Some(email) = changes.email {
            model.email = ActiveValue::Set(email);
            dirty = true;
        }
        if let Some(password_hash) = changes.password_hash {
            model.password_hash = ActiveValue::Set(password_hash);
            dirty = true;
        }
        if let Some(first_name) = changes.first_name {
            model.first_name = ActiveValue::Set(first_name);
            dirty = true;
        }
        if let Some(last_name) = changes.last_name {
            model.last_name = ActiveValue::Set(last_name);
            dirty = true;
        }
        if let Some(role) = changes.role {
            model.role = ActiveValue::Set(role);
            // Only team members sit on a project's team.
            if role != UserRole::TeamMember {
                model.current_project_id = ActiveValue::Set(None);
            }
            dirty = true;
        }

        if !dirty {
            return self.find_by_id(id).await;
        }

        let result = entity::prelude::User::update_many()
            .set(model)
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Soft-deletes a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows affected, `0` when the user is missing or already deleted
    /// - `Err(DbErr)` - Database error during update
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        soft_delete::<entity::prelude::User, C>(self.db, id).await
    }

    /// Lists the live members of a project's team, ordered by ID.
    pub async fn find_team_members(&self, project_id: i32) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find_active()
            .filter(entity::user::Column::CurrentProjectId.eq(project_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Attaches team members to a project.
    ///
    /// The write is guarded so only live `TeamMember` users without a current
    /// project are touched; a user attached concurrently elsewhere is skipped.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users attached
    /// - `Err(DbErr)` - Database error during update
    pub async fn assign_to_project(&self, project_id: i32, user_ids: &[i32]) -> Result<u64, DbErr> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::CurrentProjectId,
                Expr::value(Some(project_id)),
            )
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .filter(entity::user::Column::Role.eq(UserRole::TeamMember))
            .filter(entity::user::Column::CurrentProjectId.is_null())
            .filter(entity::user::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Detaches one user from a project's team.
    ///
    /// # Returns
    /// - `Ok(u64)` - `1` when detached, `0` when the user was not on that team
    /// - `Err(DbErr)` - Database error during update
    pub async fn remove_from_project(&self, project_id: i32, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::CurrentProjectId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::CurrentProjectId.eq(project_id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Detaches every member of a project's team, live or deleted.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users released
    /// - `Err(DbErr)` - Database error during update
    pub async fn release_project_members(&self, project_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::CurrentProjectId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::user::Column::CurrentProjectId.eq(project_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
