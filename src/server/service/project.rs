use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{project::ProjectRepository, sprint::SprintRepository, user::UserRepository},
    error::{
        domain::{DomainError, RejectionReason, TeamAssignmentError},
        AppError,
    },
    model::{
        project::{
            CreateProjectParams, PaginatedProjects, Project, ProjectFilter, TeamAssignment,
            UpdateProjectParams,
        },
        total_pages,
        user::User,
    },
    service::{
        authorization::AuthorizationResolver,
        validation::{partition_team_candidates, validate_project_dates, validate_sprint_dates},
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a project managed by the caller.
    pub async fn create(
        &self,
        principal_id: i32,
        params: CreateProjectParams,
    ) -> Result<Project, AppError> {
        validate_project_dates(params.start_date, params.end_date)?;

        let project = ProjectRepository::new(self.db)
            .create(principal_id, params)
            .await?;

        tracing::info!("User {} created project {}", principal_id, project.id);

        Ok(project)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Project, AppError> {
        ProjectRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::ProjectNotExist(id).into())
    }

    pub async fn get_paginated(
        &self,
        filter: ProjectFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProjects, AppError> {
        let (projects, total) = ProjectRepository::new(self.db)
            .get_paginated(&filter, page, per_page)
            .await?;

        Ok(PaginatedProjects {
            projects,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates a project the caller manages.
    ///
    /// The merged start and end dates are validated before writing, and every
    /// live sprint of the project must still start inside them.
    pub async fn update(
        &self,
        principal_id: i32,
        id: i32,
        params: UpdateProjectParams,
    ) -> Result<Project, AppError> {
        let managed = AuthorizationResolver::new(self.db)
            .resolve::<Project>(principal_id, id)
            .await?;
        let current = managed.entity;

        let start = params.start_date.unwrap_or(current.start_date);
        let end = params.end_date.unwrap_or(current.end_date);
        validate_project_dates(start, end)?;

        if params.start_date.is_some() || params.end_date.is_some() {
            let merged = Project {
                start_date: start,
                end_date: end,
                ..current
            };

            // Live sprints must still start inside the project's new range.
            for sprint in SprintRepository::new(self.db).find_by_project_id(id).await? {
                if let Err(err) = validate_sprint_dates(sprint.start_date, &merged) {
                    return Err(DomainError::ProjectDateInvalid(format!(
                        "sprint {} no longer fits: {}",
                        sprint.id, err
                    ))
                    .into());
                }
            }
        }

        ProjectRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| DomainError::ProjectNotExist(id).into())
    }

    /// Soft-deletes a project the caller manages and releases its team.
    ///
    /// Sprints and tasks are not deleted.
    pub async fn delete(&self, principal_id: i32, id: i32) -> Result<(), AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Project>(principal_id, id)
            .await?;

        let txn = self.db.begin().await?;

        let affected = ProjectRepository::new(&txn).delete(id).await?;
        if affected == 0 {
            txn.rollback().await?;
            return Err(DomainError::ProjectNotExist(id).into());
        }

        let released = UserRepository::new(&txn)
            .release_project_members(id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "User {} deleted project {} and released {} team members",
            principal_id,
            id,
            released
        );

        Ok(())
    }

    /// Splits candidates into those eligible to join a team and the rejected rest.
    ///
    /// # Returns
    /// - `Ok((valid_ids, None))` - Every candidate is eligible
    /// - `Ok((valid_ids, Some(error)))` - Error names each rejected id and why
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn find_valid_team_members_for_assignment(
        &self,
        candidate_ids: &[i32],
    ) -> Result<(Vec<i32>, Option<TeamAssignmentError>), AppError> {
        let users = UserRepository::new(self.db)
            .find_by_ids(candidate_ids)
            .await?;

        Ok(partition_team_candidates(candidate_ids, &users))
    }

    /// Attaches eligible candidates to the team of a project the caller manages.
    ///
    /// Assignment is partial. A candidate that passes validation but is attached to
    /// another project before the guarded write lands is reported as rejected.
    ///
    /// # Returns
    /// - `Ok(TeamAssignment)` - At least one user was assigned, or none were requested
    /// - `Err(DomainError::TeamAssignment)` - Every candidate was rejected
    pub async fn add_team_members(
        &self,
        principal_id: i32,
        project_id: i32,
        candidate_ids: &[i32],
    ) -> Result<TeamAssignment, AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Project>(principal_id, project_id)
            .await?;

        let (valid_ids, rejected) = self
            .find_valid_team_members_for_assignment(candidate_ids)
            .await?;
        let mut rejected = rejected.unwrap_or_default();

        let user_repo = UserRepository::new(self.db);
        user_repo.assign_to_project(project_id, &valid_ids).await?;

        let mut refreshed: HashMap<i32, User> = user_repo
            .find_by_ids(&valid_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut assigned = Vec::new();
        for id in valid_ids {
            match refreshed.remove(&id) {
                Some(user) if user.current_project_id == Some(project_id) => assigned.push(user),
                Some(user) => {
                    let reason = match user.current_project_id {
                        Some(other) => RejectionReason::AlreadyAssigned(other),
                        None => RejectionReason::IneligibleRole(user.role),
                    };
                    rejected.push(id, reason);
                }
                None => rejected.push(id, RejectionReason::NotFound),
            }
        }

        if assigned.is_empty() && !rejected.is_empty() {
            return Err(DomainError::TeamAssignment(rejected).into());
        }

        tracing::info!(
            "User {} assigned {} members to project {}",
            principal_id,
            assigned.len(),
            project_id
        );

        Ok(TeamAssignment {
            assigned,
            rejected: rejected.into_option(),
        })
    }

    pub async fn get_team_members(
        &self,
        principal_id: i32,
        project_id: i32,
    ) -> Result<Vec<User>, AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Project>(principal_id, project_id)
            .await?;

        Ok(UserRepository::new(self.db)
            .find_team_members(project_id)
            .await?)
    }

    pub async fn remove_team_member(
        &self,
        principal_id: i32,
        project_id: i32,
        user_id: i32,
    ) -> Result<(), AppError> {
        AuthorizationResolver::new(self.db)
            .resolve::<Project>(principal_id, project_id)
            .await?;

        let affected = UserRepository::new(self.db)
            .remove_from_project(project_id, user_id)
            .await?;

        if affected == 0 {
            return Err(DomainError::UserNotInProject {
                user_id,
                project_id,
            }
            .into());
        }

        Ok(())
    }
}
