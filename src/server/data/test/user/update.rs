use super::*;

/// Tests that only the provided fields are written.
///
/// Expected: Ok(Some) with first name changed and other fields untouched
#[tokio::test]
async fn updates_only_set_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .first_name("Old")
        .last_name("Name")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UserChanges {
                first_name: Some("New".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "New");
    assert_eq!(updated.last_name, "Name");
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            999,
            UserChanges {
                last_name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that promoting a team member releases their team membership.
///
/// Expected: Ok(Some) with the new role and no current project
#[tokio::test]
async fn role_change_releases_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let project = factory::create_project(db, manager.id).await?;
    let member = UserFactory::new(db)
        .current_project_id(Some(project.id))
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            member.id,
            UserChanges {
                role: Some(UserRole::ProjectManager),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.role, UserRole::ProjectManager);
    assert_eq!(updated.current_project_id, None);

    Ok(())
}

/// Tests that keeping the team member role leaves membership alone.
///
/// Expected: Ok(Some) with the same current project
#[tokio::test]
async fn team_member_role_keeps_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let project = factory::create_project(db, manager.id).await?;
    let member = UserFactory::new(db)
        .current_project_id(Some(project.id))
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            member.id,
            UserChanges {
                role: Some(UserRole::TeamMember),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.current_project_id, Some(project.id));

    Ok(())
}
