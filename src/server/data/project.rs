//! Project data repository.
//!
//! Handles persistence of projects, including filtered pagination and the guarded
//! sparse update used by the project service.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{contains_pattern, soft_delete, SoftDelete},
    model::project::{CreateProjectParams, Project, ProjectFilter, UpdateProjectParams},
};

pub struct ProjectRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProjectRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new project owned by `manager_id`.
    pub async fn create(
        &self,
        manager_id: i32,
        params: CreateProjectParams,
    ) -> Result<Project, DbErr> {
        let entity = entity::project::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            manager_id: ActiveValue::Set(manager_id),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(entity))
    }

    /// Finds a live project by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Project>, DbErr> {
        let entity = entity::prelude::Project::find_active_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Project::from_entity))
    }

    /// Gets a page of live projects matching `filter`, ordered by ID.
    ///
    /// # Returns
    /// - `Ok((projects, total))` - Projects on the page and the total match count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        filter: &ProjectFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Project>, u64), DbErr> {
        let mut query = entity::prelude::Project::find_active();

        if let Some(id) = filter.id {
            query = query.filter(entity::project::Column::Id.eq(id));
        }
        if let Some(name) = &filter.name {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::project::Column::Name)))
                    .like(contains_pattern(name).as_str()),
            );
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::project::Column::Status.eq(status));
        }
        if let Some(manager_id) = filter.manager_id {
            query = query.filter(entity::project::Column::ManagerId.eq(manager_id));
        }
        if let Some(start_from) = filter.start_from {
            query = query.filter(entity::project::Column::StartDate.gte(start_from));
        }
        if let Some(start_to) = filter.start_to {
            query = query.filter(entity::project::Column::StartDate.lte(start_to));
        }

        let paginator = query
            .order_by_asc(entity::project::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Project::from_entity).collect(),
            total,
        ))
    }

    /// Writes only the fields set in `params`.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - Updated project; unchanged project when `params` is empty
    /// - `Ok(None)` - No live project with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProjectParams,
    ) -> Result<Option<Project>, DbErr> {
        if params.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut model = <entity::project::ActiveModel as ActiveModelTrait>::default();
        if let Some(name) = params.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            model.description = ActiveValue::Set(description);
        }
        if let Some(status) = params.status {
            model.status = ActiveValue::Set(status);
        }
        if let Some(start_date) = params.start_date {
            model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            model.end_date = ActiveValue::Set(end_date);
        }

        let result = entity::prelude::Project::update_many()
            .set(model)
            .filter(entity::project::Column::Id.eq(id))
            .filter(entity::project::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Soft-deletes a project. Sprints and tasks are left in place.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows affected, `0` when the project is missing or already deleted
    /// - `Err(DbErr)` - Database error during update
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        soft_delete::<entity::prelude::Project, C>(self.db, id).await
    }
}
