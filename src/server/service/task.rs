use sea_orm::DatabaseConnection;

use crate::server::{
    data::{task::TaskRepository, user::UserRepository},
    error::{domain::DomainError, AppError},
    model::{
        project::Project,
        sprint::Sprint,
        task::{CreateTaskParams, Task, TaskFilter, UpdateTaskParams},
    },
    service::{authorization::AuthorizationResolver, validation::validate_assignee},
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a task inside a sprint whose project the caller manages.
    ///
    /// The task's project is copied from the sprint's project.
    pub async fn create(
        &self,
        principal_id: i32,
        sprint_id: i32,
        params: CreateTaskParams,
    ) -> Result<Task, AppError> {
        let managed = AuthorizationResolver::new(self.db)
            .resolve::<Sprint>(principal_id, sprint_id)
            .await?;

        let task = TaskRepository::new(self.db)
            .create(managed.project.id, Some(managed.entity.id), params)
            .await?;

        Ok(task)
    }

    pub async fn get_by_id(&self, principal_id: i32, id: i32) -> Result<Task, AppError> {
        let managed = AuthorizationResolver::new(self.db)
            .resolve::<Task>(principal_id, id)
            .await?;

        Ok(managed.entity)
    }

    pub async fn find_by_project_id(
        &self,
        principal_id: i32,
        project_id: i32,
        filter: TaskFilter,
    ) -> Result<Vec<Task>, AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Project>(principal_id, project_id)
            .await?;

        Ok(TaskRepository::new(self.db)
            .find_by_project_id(project_id, &filter)
            .await?)
    }

    pub async fn find_by_sprint_id(
        &self,
        principal_id: i32,
        sprint_id: i32,
    ) -> Result<Vec<Task>, AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Sprint>(principal_id, sprint_id)
            .await?;

        Ok(TaskRepository::new(self.db)
            .find_by_sprint_id(sprint_id)
            .await?)
    }

    /// Lists tasks assigned to the caller.
    pub async fn find_assigned_to(&self, principal_id: i32) -> Result<Vec<Task>, AppError> {
        Ok(TaskRepository::new(self.db)
            .find_by_assignee(principal_id)
            .await?)
    }

    pub async fn update(
        &self,
        principal_id: i32,
        id: i32,
        params: UpdateTaskParams,
    ) -> Result<Task, AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Task>(principal_id, id)
            .await?;

        TaskRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| DomainError::TaskNotExist(id).into())
    }

    /// Assigns a task to a member of its project's team or to the project's manager.
    ///
    /// # Returns
    /// - `Ok(Task)` - Task with the new assignee
    /// - `Err(DomainError::UserNotExist)` - No live user with `user_id`
    /// - `Err(DomainError::UserNotInProject)` - User is neither on the team nor its manager
    pub async fn assign(
        &self,
        principal_id: i32,
        task_id: i32,
        user_id: i32,
    ) -> Result<Task, AppError> {
        let managed = AuthorizationResolver::new(self.db)
            .resolve::<Task>(principal_id, task_id)
            .await?;

        let Some(assignee) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(DomainError::UserNotExist(user_id).into());
        };
        validate_assignee(&assignee, &managed.project)?;

        TaskRepository::new(self.db)
            .set_assignee(task_id, user_id)
            .await?
            .ok_or_else(|| DomainError::TaskNotExist(task_id).into())
    }

    pub async fn delete(&self, principal_id: i32, id: i32) -> Result<(), AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Task>(principal_id, id)
            .await?;

        let affected = TaskRepository::new(self.db).delete(id).await?;
        if affected == 0 {
            return Err(DomainError::TaskNotExist(id).into());
        }

        Ok(())
    }
}
