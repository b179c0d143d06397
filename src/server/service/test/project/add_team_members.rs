use super::*;

/// Tests partial team assignment with one candidate of each rejection kind.
///
/// Candidates are `[valid1, missing, wrong-role, already-assigned, valid2]`.
///
/// Expected: Ok with exactly valid1 and valid2 assigned and three rejections
#[tokio::test]
async fn assigns_valid_subset_and_reports_rejections() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project) = create_project_with_manager(db).await?;
    let (_, other_project) = create_project_with_manager(db).await?;

    let valid1 = factory::create_user(db).await?;
    let missing_id = 9_999;
    let wrong_role = UserFactory::new(db)
        .role(UserRole::ProjectManager)
        .build()
        .await?;
    let already = UserFactory::new(db)
        .current_project_id(Some(other_project.id))
        .build()
        .await?;
    let valid2 = factory::create_user(db).await?;

    let outcome = ProjectService::new(db)
        .add_team_members(
            manager.id,
            project.id,
            &[valid1.id, missing_id, wrong_role.id, already.id, valid2.id],
        )
        .await?;

    let assigned: Vec<i32> = outcome.assigned.iter().map(|u| u.id).collect();
    assert_eq!(assigned, vec![valid1.id, valid2.id]);
    assert!(outcome
        .assigned
        .iter()
        .all(|u| u.current_project_id == Some(project.id)));

    let rejected = outcome.rejected.unwrap();
    let reasons: Vec<(i32, RejectionReason)> = rejected
        .rejections
        .into_iter()
        .map(|r| (r.user_id, r.reason))
        .collect();
    assert_eq!(
        reasons,
        vec![
            (missing_id, RejectionReason::NotFound),
            (
                wrong_role.id,
                RejectionReason::IneligibleRole(UserRole::ProjectManager)
            ),
            (
                already.id,
                RejectionReason::AlreadyAssigned(other_project.id)
            ),
        ]
    );

    Ok(())
}

/// Tests an assignment where every candidate is rejected.
///
/// Expected: Err(DomainError::TeamAssignment)
#[tokio::test]
async fn fails_when_nobody_is_assigned() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project) = create_project_with_manager(db).await?;

    let result = ProjectService::new(db)
        .add_team_members(manager.id, project.id, &[1234])
        .await;

    match result {
        Err(AppError::DomainErr(DomainError::TeamAssignment(err))) => {
            assert_eq!(err.rejections.len(), 1);
            assert_eq!(err.rejections[0].user_id, 1234);
        }
        _ => panic!("expected TeamAssignment error"),
    }

    Ok(())
}

/// Tests that only the manager can add team members.
///
/// Expected: Err(DomainError::UserNotManageProject)
#[tokio::test]
async fn rejects_non_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project) = create_project_with_manager(db).await?;
    let member = factory::create_user(db).await?;

    let result = ProjectService::new(db)
        .add_team_members(member.id, project.id, &[member.id])
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::UserNotManageProject { .. }))
    ));

    Ok(())
}
