//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a project-manager user and a project they manage.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((manager, project))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_project_with_manager(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::project::Model), DbErr> {
    let manager = crate::factory::user::create_manager(db).await?;
    let project = crate::factory::project::create_project(db, manager.id).await?;

    Ok((manager, project))
}

/// Creates a manager, a project they manage, and one sprint inside it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((manager, project, sprint))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_sprint_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::project::Model,
        entity::sprint::Model,
    ),
    DbErr,
> {
    let (manager, project) = create_project_with_manager(db).await?;
    let sprint = crate::factory::sprint::create_sprint(db, project.id).await?;

    Ok((manager, project, sprint))
}

/// Creates a manager, project, sprint and a task in that sprint.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((manager, project, sprint, task))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_task_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::project::Model,
        entity::sprint::Model,
        entity::task::Model,
    ),
    DbErr,
> {
    let (manager, project, sprint) = create_sprint_with_dependencies(db).await?;
    let task = crate::factory::task::TaskFactory::new(db, project.id)
        .sprint_id(sprint.id)
        .build()
        .await?;

    Ok((manager, project, sprint, task))
}
