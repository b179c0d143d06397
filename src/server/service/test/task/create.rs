use super::*;

/// Tests that a created task inherits the sprint's project.
///
/// Expected: Ok with project_id and sprint_id copied from the sprint
#[tokio::test]
async fn copies_project_from_sprint() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project, sprint) = create_sprint_with_dependencies(db).await?;

    let service = TaskService::new(db);
    let task = service
        .create(manager.id, sprint.id, new_task("Plan"))
        .await?;

    assert_eq!(task.project_id, project.id);
    assert_eq!(task.sprint_id, Some(sprint.id));
    assert_eq!(task.status, TaskStatus::ToDo);

    let listed = service
        .find_by_project_id(manager.id, project.id, TaskFilter::default())
        .await?;
    assert_eq!(listed.len(), 1);
    let in_sprint = service.find_by_sprint_id(manager.id, sprint.id).await?;
    assert_eq!(in_sprint[0].id, task.id);

    Ok(())
}

/// Tests creating a task in a sprint of another manager's project.
///
/// Expected: Err(DomainError::UserNotManageProject)
#[tokio::test]
async fn rejects_non_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, sprint) = create_sprint_with_dependencies(db).await?;
    let other = factory::create_manager(db).await?;

    let result = TaskService::new(db)
        .create(other.id, sprint.id, new_task("Sneaky"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserNotManageProject { .. }))
    ));

    Ok(())
}

/// Tests creating a task in a missing sprint.
///
/// Expected: Err(DomainError::SprintNotExist)
#[tokio::test]
async fn rejects_missing_sprint() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;

    let result = TaskService::new(db)
        .create(manager.id, 555, new_task("Nowhere"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::SprintNotExist(555)))
    ));

    Ok(())
}
