use super::*;
use crate::server::data::user::UserRepository;

/// Tests that deleting a project releases its team.
///
/// Expected: Ok, project gone, former members unassigned
#[tokio::test]
async fn releases_team_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project) = create_project_with_manager(db).await?;
    let member = UserFactory::new(db)
        .current_project_id(Some(project.id))
        .build()
        .await?;

    let service = ProjectService::new(db);
    service.delete(manager.id, project.id).await?;

    assert!(matches!(
        service.get_by_id(project.id).await,
        Err(AppError::DomainErr(DomainError::ProjectNotExist(_)))
    ));

    let member = UserRepository::new(db).find_by_id(member.id).await?.unwrap();
    assert!(member.current_project_id.is_none());

    Ok(())
}

/// Tests deleting an already deleted project.
///
/// Expected: Err(DomainError::ProjectNotExist)
#[tokio::test]
async fn second_delete_reports_missing_project() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project) = create_project_with_manager(db).await?;

    let service = ProjectService::new(db);
    service.delete(manager.id, project.id).await?;

    assert!(matches!(
        service.delete(manager.id, project.id).await,
        Err(AppError::DomainErr(DomainError::ProjectNotExist(_)))
    ));

    Ok(())
}
