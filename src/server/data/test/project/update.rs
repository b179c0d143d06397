use super::*;

/// Tests clearing the end date through a doubly optional field.
///
/// Expected: Ok(Some) with end date removed and name unchanged
#[tokio::test]
async fn clears_end_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let project = ProjectFactory::new(db, manager.id)
        .end_date(Some(date(2024, 6, 30)))
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(
            project.id,
            UpdateProjectParams {
                end_date: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(updated.end_date.is_none());
    assert_eq!(updated.name, project.name);

    Ok(())
}

/// Tests updating a soft-deleted project.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_deleted_project() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let project = factory::create_project(db, manager.id).await?;

    let repo = ProjectRepository::new(db);
    repo.delete(project.id).await?;

    let result = repo
        .update(
            project.id,
            UpdateProjectParams {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
