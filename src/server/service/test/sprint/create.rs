use super::*;

/// Tests sprint start containment for an open-ended project starting 2024-01-01.
///
/// Expected: 2023-12-31 rejected with SprintDateInvalid, 2024-02-01 accepted
#[tokio::test]
async fn bounds_sprint_start_by_project_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let project = ProjectFactory::new(db, manager.id)
        .start_date(date(2024, 1, 1))
        .end_date(None)
        .build()
        .await?;

    let service = SprintService::new(db);

    let early = service
        .create(manager.id, project.id, sprint_starting(date(2023, 12, 31)))
        .await;
    assert!(matches!(
        early,
        Err(AppError::DomainErr(DomainError::SprintDateInvalid(_)))
    ));

    let sprint = service
        .create(manager.id, project.id, sprint_starting(date(2024, 2, 1)))
        .await?;
    assert_eq!(sprint.project_id, project.id);

    Ok(())
}

/// Tests that a sprint may not start after its project ends, while its own end may.
///
/// Expected: start after project end rejected; end after project end accepted
#[tokio::test]
async fn bounds_only_sprint_start_by_project_end() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let project = ProjectFactory::new(db, manager.id)
        .start_date(date(2024, 1, 1))
        .end_date(Some(date(2024, 3, 31)))
        .build()
        .await?;

    let service = SprintService::new(db);

    let late = service
        .create(manager.id, project.id, sprint_starting(date(2024, 4, 1)))
        .await;
    assert!(matches!(
        late,
        Err(AppError::DomainErr(DomainError::SprintDateInvalid(_)))
    ));

    let overhanging = service
        .create(manager.id, project.id, sprint_starting(date(2024, 3, 25)))
        .await?;
    assert!(overhanging.end_date > date(2024, 3, 31));

    Ok(())
}

/// Tests creating a sprint in someone else's project.
///
/// Expected: Err(DomainError::UserNotManageProject)
#[tokio::test]
async fn rejects_non_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = create_project_with_manager(db).await?;
    let other = factory::create_manager(db).await?;

    let result = SprintService::new(db)
        .create(other.id, project.id, sprint_starting(date(2024, 2, 1)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserNotManageProject { .. }))
    ));

    Ok(())
}

/// Tests creating a sprint in a missing project.
///
/// Expected: Err(DomainError::ProjectNotExist)
#[tokio::test]
async fn rejects_missing_project() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;

    let result = SprintService::new(db)
        .create(manager.id, 31337, sprint_starting(date(2024, 2, 1)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::ProjectNotExist(31337)))
    ));

    Ok(())
}
