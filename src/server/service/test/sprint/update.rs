use super::*;

/// Tests that an update moving the start before the project start is rejected.
///
/// Expected: Err(DomainError::SprintDateInvalid)
#[tokio::test]
async fn revalidates_merged_dates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _, sprint) = create_sprint_with_dependencies(db).await?;

    let result = SprintService::new(db)
        .update(
            manager.id,
            sprint.id,
            UpdateSprintParams {
                start_date: Some(date(2023, 6, 1)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::SprintDateInvalid(_)))
    ));

    Ok(())
}

/// Tests that an end date earlier than the stored start is rejected.
///
/// Expected: Err(DomainError::SprintDateInvalid)
#[tokio::test]
async fn rejects_end_before_stored_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, _, sprint) = create_sprint_with_dependencies(db).await?;

    let result = SprintService::new(db)
        .update(
            manager.id,
            sprint.id,
            UpdateSprintParams {
                end_date: Some(sprint.start_date - chrono::Duration::days(1)),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::SprintDateInvalid(_)))
    ));

    Ok(())
}

/// Tests that a non-manager cannot update a sprint.
///
/// Expected: Err(DomainError::UserNotManageProject)
#[tokio::test]
async fn rejects_non_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, sprint) = create_sprint_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;

    let result = SprintService::new(db)
        .update(
            member.id,
            sprint.id,
            UpdateSprintParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserNotManageProject { .. }))
    ));

    Ok(())
}
