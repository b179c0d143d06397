//! Sprint data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::{soft_delete, SoftDelete},
    model::{
        project::Project,
        sprint::{CreateSprintParams, Sprint, UpdateSprintParams},
    },
};

pub struct SprintRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SprintRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a sprint inside `project_id`.
    pub async fn create(&self, project_id: i32, params: CreateSprintParams) -> Result<Sprint, DbErr> {
        let entity = entity::sprint::ActiveModel {
            name: ActiveValue::Set(params.name),
            goal: ActiveValue::Set(params.goal),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            project_id: ActiveValue::Set(project_id),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Sprint::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Sprint>, DbErr> {
        let entity = entity::prelude::Sprint::find_active_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Sprint::from_entity))
    }

    /// Finds a live sprint together with its owning project.
    ///
    /// A sprint whose project has been deleted is reported as missing.
    pub async fn find_with_project(&self, id: i32) -> Result<Option<(Sprint, Project)>, DbErr> {
        let result = entity::prelude::Sprint::find_active_by_id(id)
            .find_also_related(entity::prelude::Project)
            .one(self.db)
            .await?;

        Ok(match result {
            Some((sprint, Some(project))) if project.deleted_at.is_none() => Some((
                Sprint::from_entity(sprint),
                Project::from_entity(project),
            )),
            _ => None,
        })
    }

    /// Lists the live sprints of a project ordered by start date.
    pub async fn find_by_project_id(&self, project_id: i32) -> Result<Vec<Sprint>, DbErr> {
        let entities = entity::prelude::Sprint::find_active()
            .filter(entity::sprint::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::sprint::Column::StartDate)
            .order_by_asc(entity::sprint::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Sprint::from_entity).collect())
    }

    /// Writes only the fields set in `params`.
    ///
    /// # Returns
    /// - `Ok(Some(Sprint))` - Updated sprint; unchanged sprint when `params` is empty
    /// - `Ok(None)` - No live sprint with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateSprintParams) -> Result<Option<Sprint>, DbErr> {
        if params.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut model = <entity::sprint::ActiveModel as ActiveModelTrait>::default();
        if let Some(name) = params.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(goal) = params.goal {
            model.goal = ActiveValue::Set(goal);
        }
        if let Some(start_date) = params.start_date {
            model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            model.end_date = ActiveValue::Set(end_date);
        }

        let result = entity::prelude::Sprint::update_many()
            .set(model)
            .filter(entity::sprint::Column::Id.eq(id))
            .filter(entity::sprint::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Soft-deletes a sprint. Its tasks keep their `sprint_id`.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        soft_delete::<entity::prelude::Sprint, C>(self.db, id).await
    }
}
