use super::*;

/// Tests deleting a sprint that is already deleted.
///
/// Expected: Ok, then Err(DomainError::SprintNotExist)
#[tokio::test]
async fn second_delete_reports_missing_sprint() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _, sprint) = create_sprint_with_dependencies(db).await?;

    let service = SprintService::new(db);
    service.delete(manager.id, sprint.id).await?;

    let result = service.delete(manager.id, sprint.id).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::SprintNotExist(_)))
    ));

    Ok(())
}

/// Tests that a non-manager cannot delete a sprint.
///
/// Expected: Err(DomainError::UserNotManageProject) and the sprint still listed
#[tokio::test]
async fn rejects_non_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project, sprint) = create_sprint_with_dependencies(db).await?;
    let other = factory::create_manager(db).await?;

    let service = SprintService::new(db);
    let result = service.delete(other.id, sprint.id).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserNotManageProject { .. }))
    ));
    assert_eq!(
        service
            .find_by_project_id(manager.id, project.id)
            .await?
            .len(),
        1
    );

    Ok(())
}
