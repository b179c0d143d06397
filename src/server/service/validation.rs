//! Pure business-rule checks over already-fetched values.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use entity::user::UserRole;

use crate::server::{
    error::domain::{DomainError, RejectionReason, TeamAssignmentError},
    model::{project::Project, user::User},
};

/// Checks that a project's end date, if any, is not before its start date.
pub fn validate_project_dates(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), DomainError> {
    match end {
        Some(end) if end < start => Err(DomainError::ProjectDateInvalid(format!(
            "end date {} is before start date {}",
            end, start
        ))),
        _ => Ok(()),
    }
}

/// Checks that a sprint's end date is not before its start date.
pub fn validate_sprint_range(start: NaiveDate, end: NaiveDate) -> Result<(), DomainError> {
    if end < start {
        return Err(DomainError::SprintDateInvalid(format!(
            "end date {} is before start date {}",
            end, start
        )));
    }

    Ok(())
}

/// Checks that a sprint starts inside its project.
///
/// Only the sprint's start is bounded: it may not precede the project's start nor,
/// when the project has an end date, follow it. The sprint's end is not compared
/// with the project's end.
pub fn validate_sprint_dates(sprint_start: NaiveDate, project: &Project) -> Result<(), DomainError> {
    if sprint_start < project.start_date {
        return Err(DomainError::SprintDateInvalid(format!(
            "sprint starts {} before project {} starts {}",
            sprint_start, project.id, project.start_date
        )));
    }

    if let Some(project_end) = project.end_date {
        if sprint_start > project_end {
            return Err(DomainError::SprintDateInvalid(format!(
                "sprint starts {} after project {} ends {}",
                sprint_start, project.id, project_end
            )));
        }
    }

    Ok(())
}

/// Checks a single candidate for team membership.
///
/// `None` stands for a candidate id that matched no live user.
pub fn check_team_candidate(user: Option<&User>) -> Result<(), RejectionReason> {
    let Some(user) = user else {
        return Err(RejectionReason::NotFound);
    };

    if user.role != UserRole::TeamMember {
        return Err(RejectionReason::IneligibleRole(user.role));
    }

    if let Some(project_id) = user.current_project_id {
        return Err(RejectionReason::AlreadyAssigned(project_id));
    }

    Ok(())
}

/// Splits candidate ids into those eligible for team assignment and an
/// aggregated error naming every rejected id.
///
/// Duplicate ids are considered once; input order is kept.
///
/// # Arguments
/// - `candidate_ids` - Ids requested by the caller
/// - `users` - Live users found for those ids
///
/// # Returns
/// - `(valid_ids, None)` - Every candidate passed
/// - `(valid_ids, Some(error))` - Some candidates were rejected
pub fn partition_team_candidates(
    candidate_ids: &[i32],
    users: &[User],
) -> (Vec<i32>, Option<TeamAssignmentError>) {
    let by_id: HashMap<i32, &User> = users.iter().map(|u| (u.id, u)).collect();
    let mut seen = HashSet::new();
    let mut valid = Vec::new();
    let mut rejected = TeamAssignmentError::default();

    for &id in candidate_ids {
        if !seen.insert(id) {
            continue;
        }

        match check_team_candidate(by_id.get(&id).copied()) {
            Ok(()) => valid.push(id),
            Err(reason) => rejected.push(id, reason),
        }
    }

    (valid, rejected.into_option())
}

/// Checks that `user` may be assigned tasks in `project`.
///
/// The project's manager and members of its team qualify.
pub fn validate_assignee(user: &User, project: &Project) -> Result<(), DomainError> {
    if user.id == project.manager_id || user.current_project_id == Some(project.id) {
        return Ok(());
    }

    Err(DomainError::UserNotInProject {
        user_id: user.id,
        project_id: project.id,
    })
}
