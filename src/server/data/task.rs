//! Task data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{soft_delete, SoftDelete},
    model::{
        project::Project,
        task::{CreateTaskParams, Task, TaskFilter, UpdateTaskParams},
    },
};

pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a task.
    ///
    /// # Arguments
    /// - `project_id` - Owning project, copied from the sprint by the caller
    /// - `sprint_id` - Sprint the task belongs to, if any
    /// - `params` - Task fields
    pub async fn create(
        &self,
        project_id: i32,
        sprint_id: Option<i32>,
        params: CreateTaskParams,
    ) -> Result<Task, DbErr> {
        let entity = entity::task::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status),
            priority: ActiveValue::Set(params.priority),
            due_date: ActiveValue::Set(params.due_date),
            project_id: ActiveValue::Set(project_id),
            sprint_id: ActiveValue::Set(sprint_id),
            assignee_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Task>, DbErr> {
        let entity = entity::prelude::Task::find_active_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Task::from_entity))
    }

    /// Finds a live task together with its owning project.
    ///
    /// The project is reached through the task's own `project_id`, never through
    /// its sprint. A task whose project has been deleted is reported as missing.
    pub async fn find_with_project(&self, id: i32) -> Result<Option<(Task, Project)>, DbErr> {
        let result = entity::prelude::Task::find_active_by_id(id)
            .find_also_related(entity::prelude::Project)
            .one(self.db)
            .await?;

        Ok(match result {
            Some((task, Some(project))) if project.deleted_at.is_none() => {
                Some((Task::from_entity(task), Project::from_entity(project)))
            }
            _ => None,
        })
    }

    /// Lists the live tasks of a project matching `filter`, ordered by ID.
    pub async fn find_by_project_id(
        &self,
        project_id: i32,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, DbErr> {
        let mut query = entity::prelude::Task::find_active()
            .filter(entity::task::Column::ProjectId.eq(project_id));

        if let Some(status) = filter.status {
            query = query.filter(entity::task::Column::Status.eq(status));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(entity::task::Column::Priority.eq(priority));
        }
        if let Some(assignee_id) = filter.assignee_id {
            query = query.filter(entity::task::Column::AssigneeId.eq(assignee_id));
        }
        if let Some(due_from) = filter.due_from {
            query = query.filter(entity::task::Column::DueDate.gte(due_from));
        }
        if let Some(due_to) = filter.due_to {
            query = query.filter(entity::task::Column::DueDate.lte(due_to));
        }

        let entities = query
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }

    /// Lists the live tasks of a sprint, ordered by ID.
    pub async fn find_by_sprint_id(&self, sprint_id: i32) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find_active()
            .filter(entity::task::Column::SprintId.eq(sprint_id))
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }

    /// Lists the live tasks assigned to a user, most urgent due date first.
    pub async fn find_by_assignee(&self, assignee_id: i32) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find_active()
            .filter(entity::task::Column::AssigneeId.eq(assignee_id))
            .order_by_asc(entity::task::Column::DueDate)
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Task::from_entity).collect())
    }

    /// Writes only the fields set in `params`.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - Updated task; unchanged task when `params` is empty
    /// - `Ok(None)` - No live task with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: UpdateTaskParams) -> Result<Option<Task>, DbErr> {
        if params.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut model = <entity::task::ActiveModel as ActiveModelTrait>::default();
        if let Some(title) = params.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            model.description = ActiveValue::Set(description);
        }
        if let Some(status) = params.status {
            model.status = ActiveValue::Set(status);
        }
        if let Some(priority) = params.priority {
            model.priority = ActiveValue::Set(priority);
        }
        if let Some(due_date) = params.due_date {
            model.due_date = ActiveValue::Set(due_date);
        }

        let result = entity::prelude::Task::update_many()
            .set(model)
            .filter(entity::task::Column::Id.eq(id))
            .filter(entity::task::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Sets the assignee of a live task.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - Updated task
    /// - `Ok(None)` - No live task with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_assignee(&self, id: i32, assignee_id: i32) -> Result<Option<Task>, DbErr> {
        let result = entity::prelude::Task::update_many()
            .col_expr(entity::task::Column::AssigneeId, Expr::value(Some(assignee_id)))
            .filter(entity::task::Column::Id.eq(id))
            .filter(entity::task::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        soft_delete::<entity::prelude::Task, C>(self.db, id).await
    }
}
