//! Ownership resolution for project-scoped entities.
//!
//! Every mutating or relationship-traversing operation on a project, sprint or task
//! first loads the entity together with its owning project and checks that the caller
//! is that project's manager. The loaded pair is handed back so services never fetch
//! it twice.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{project::ProjectRepository, sprint::SprintRepository, task::TaskRepository},
    error::{domain::DomainError, AppError},
    model::{project::Project, sprint::Sprint, task::Task},
};

/// An entity owned by exactly one project.
#[async_trait]
pub trait ManagedEntity: Sized + Send {
    /// Loads the live entity and its live owning project.
    async fn find_with_project(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(Self, Project)>, DbErr>;

    /// Error reported when no live entity has `id`.
    fn not_found(id: i32) -> DomainError;
}

#[async_trait]
impl ManagedEntity for Project {
    async fn find_with_project(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(Self, Project)>, DbErr> {
        let project = ProjectRepository::new(db).find_by_id(id).await?;

        Ok(project.map(|p| (p.clone(), p)))
    }

    fn not_found(id: i32) -> DomainError {
        DomainError::ProjectNotExist(id)
    }
}

#[async_trait]
impl ManagedEntity for Sprint {
    async fn find_with_project(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(Self, Project)>, DbErr> {
        SprintRepository::new(db).find_with_project(id).await
    }

    fn not_found(id: i32) -> DomainError {
        DomainError::SprintNotExist(id)
    }
}

#[async_trait]
impl ManagedEntity for Task {
    async fn find_with_project(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<(Self, Project)>, DbErr> {
        TaskRepository::new(db).find_with_project(id).await
    }

    fn not_found(id: i32) -> DomainError {
        DomainError::TaskNotExist(id)
    }
}

/// An entity whose project is managed by the caller.
#[derive(Debug, Clone)]
pub struct Managed<T> {
    pub entity: T,
    pub project: Project,
}

pub struct AuthorizationResolver<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorizationResolver<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads an entity and checks that `principal_id` manages its project.
    ///
    /// # Arguments
    /// - `principal_id` - ID of the authenticated caller
    /// - `id` - ID of the project, sprint or task
    ///
    /// # Returns
    /// - `Ok(Managed<T>)` - Entity with its owning project
    /// - `Err(DomainError::*NotExist)` - Entity or its project is missing or deleted
    /// - `Err(DomainError::UserNotManageProject)` - Caller is not the project's manager
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn resolve<T: ManagedEntity>(
        &self,
        principal_id: i32,
        id: i32,
    ) -> Result<Managed<T>, AppError> {
        let Some((entity, project)) = T::find_with_project(self.db, id).await? else {
            return Err(T::not_found(id).into());
        };

        if project.manager_id != principal_id {
            return Err(DomainError::UserNotManageProject {
                user_id: principal_id,
                project_id: project.id,
            }
            .into());
        }

        Ok(Managed { entity, project })
    }
}
