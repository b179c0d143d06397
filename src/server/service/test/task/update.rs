use super::*;

/// Tests that the manager can update and delete a task while others cannot.
///
/// Expected: non-manager rejected, manager update applied, delete then missing
#[tokio::test]
async fn only_manager_mutates_task() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _, _, task) = create_task_with_dependencies(db).await?;
    let other = factory::create_manager(db).await?;
    let service = TaskService::new(db);

    let params = UpdateTaskParams {
        priority: Some(TaskPriority::Critical),
        ..Default::default()
    };

    assert!(matches!(
        service.update(other.id, task.id, params.clone()).await,
        Err(AppError::DomainErr(DomainError::UserNotManageProject { .. }))
    ));
    assert!(matches!(
        service.delete(other.id, task.id).await,
        Err(AppError::DomainErr(DomainError::UserNotManageProject { .. }))
    ));

    let updated = service.update(manager.id, task.id, params).await?;
    assert_eq!(updated.priority, TaskPriority::Critical);

    service.delete(manager.id, task.id).await?;
    assert!(matches!(
        service.get_by_id(manager.id, task.id).await,
        Err(AppError::DomainErr(DomainError::TaskNotExist(_)))
    ));

    Ok(())
}
