use sea_orm::DatabaseConnection;

use crate::server::{
    data::sprint::SprintRepository,
    error::{domain::DomainError, AppError},
    model::{
        project::Project,
        sprint::{CreateSprintParams, Sprint, UpdateSprintParams},
    },
    service::{
        authorization::AuthorizationResolver,
        validation::{validate_sprint_dates, validate_sprint_range},
    },
};

pub struct SprintService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SprintService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sprint in a project the caller manages.
    ///
    /// # Returns
    /// - `Ok(Sprint)` - Created sprint
    /// - `Err(DomainError::ProjectNotExist)` - No live project with that ID
    /// - `Err(DomainError::UserNotManageProject)` - Caller does not manage the project
    /// - `Err(DomainError::SprintDateInvalid)` - Dates reversed or outside the project
    pub async fn create(
        &self,
        principal_id: i32,
        project_id: i32,
        params: CreateSprintParams,
    ) -> Result<Sprint, AppError> {
        let managed = AuthorizationResolver::new(self.db)
            .resolve::<Project>(principal_id, project_id)
            .await?;

        validate_sprint_range(params.start_date, params.end_date)?;
        validate_sprint_dates(params.start_date, &managed.project)?;

        let sprint = SprintRepository::new(self.db)
            .create(managed.project.id, params)
            .await?;

        Ok(sprint)
    }

    pub async fn get_by_id(&self, principal_id: i32, id: i32) -> Result<Sprint, AppError> {
        let managed = AuthorizationResolver::new(self.db)
            .resolve::<Sprint>(principal_id, id)
            .await?;

        Ok(managed.entity)
    }

    pub async fn find_by_project_id(
        &self,
        principal_id: i32,
        project_id: i32,
    ) -> Result<Vec<Sprint>, AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Project>(principal_id, project_id)
            .await?;

        Ok(SprintRepository::new(self.db)
            .find_by_project_id(project_id)
            .await?)
    }

    /// Updates a sprint, re-validating the merged dates against its project.
    pub async fn update(
        &self,
        principal_id: i32,
        id: i32,
        params: UpdateSprintParams,
    ) -> Result<Sprint, AppError> {
        let managed = AuthorizationResolver::new(self.db)
            .resolve::<Sprint>(principal_id, id)
            .await?;

        let start = params.start_date.unwrap_or(managed.entity.start_date);
        let end = params.end_date.unwrap_or(managed.entity.end_date);
        validate_sprint_range(start, end)?;
        validate_sprint_dates(start, &managed.project)?;

        SprintRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| DomainError::SprintNotExist(id).into())
    }

    pub async fn delete(&self, principal_id: i32, id: i32) -> Result<(), AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Sprint>(principal_id, id)
            .await?;

        let affected = SprintRepository::new(self.db).delete(id).await?;
        if affected == 0 {
            return Err(DomainError::SprintNotExist(id).into());
        }

        Ok(())
    }
}
