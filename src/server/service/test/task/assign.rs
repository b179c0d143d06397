use super::*;

/// Tests assigning a task to a team member and listing it as theirs.
///
/// Expected: Ok with the assignee set and the task in the member's list
#[tokio::test]
async fn assigns_team_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project, _, task) = create_task_with_dependencies(db).await?;
    let member = UserFactory::new(db)
        .current_project_id(Some(project.id))
        .build()
        .await?;

    let service = TaskService::new(db);
    let assigned = service.assign(manager.id, task.id, member.id).await?;

    assert_eq!(assigned.assignee_id, Some(member.id));
    let mine = service.find_assigned_to(member.id).await?;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, task.id);

    Ok(())
}

/// Tests that the manager can take a task themselves.
///
/// Expected: Ok with the manager as assignee
#[tokio::test]
async fn assigns_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _, _, task) = create_task_with_dependencies(db).await?;

    let assigned = TaskService::new(db)
        .assign(manager.id, task.id, manager.id)
        .await?;

    assert_eq!(assigned.assignee_id, Some(manager.id));

    Ok(())
}

/// Tests assigning to a user outside the project.
///
/// Expected: Err(DomainError::UserNotInProject)
#[tokio::test]
async fn rejects_outsider() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _, _, task) = create_task_with_dependencies(db).await?;
    let outsider = factory::create_user(db).await?;

    let result = TaskService::new(db)
        .assign(manager.id, task.id, outsider.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserNotInProject { .. }))
    ));

    Ok(())
}

/// Tests assigning to a user that does not exist.
///
/// Expected: Err(DomainError::UserNotExist)
#[tokio::test]
async fn rejects_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _, _, task) = create_task_with_dependencies(db).await?;

    let result = TaskService::new(db).assign(manager.id, task.id, 8080).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserNotExist(8080)))
    ));

    Ok(())
}
