use super::*;

/// Tests removing a member and then listing the team.
///
/// Expected: Ok, team empty afterwards
#[tokio::test]
async fn removes_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project) = create_project_with_manager(db).await?;
    let member = UserFactory::new(db)
        .current_project_id(Some(project.id))
        .build()
        .await?;

    let service = ProjectService::new(db);
    assert_eq!(
        service.get_team_members(manager.id, project.id).await?.len(),
        1
    );

    service
        .remove_team_member(manager.id, project.id, member.id)
        .await?;

    assert!(service
        .get_team_members(manager.id, project.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests removing a user who is not on the team.
///
/// Expected: Err(DomainError::UserNotInProject)
#[tokio::test]
async fn rejects_user_outside_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project) = create_project_with_manager(db).await?;
    let outsider = factory::create_user(db).await?;

    let result = ProjectService::new(db)
        .remove_team_member(manager.id, project.id, outsider.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserNotInProject { .. }))
    ));

    Ok(())
}
