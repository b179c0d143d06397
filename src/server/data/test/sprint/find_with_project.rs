use super::*;

/// Tests loading a sprint with its owning project.
///
/// Expected: Ok(Some) with the matching project
#[tokio::test]
async fn loads_owning_project() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, project, sprint) = create_sprint_with_dependencies(db).await?;

    let repo = SprintRepository::new(db);
    let (found, owner) = repo.find_with_project(sprint.id).await?.unwrap();

    assert_eq!(found.id, sprint.id);
    assert_eq!(owner.id, project.id);
    assert_eq!(owner.manager_id, manager.id);

    Ok(())
}

/// Tests loading a missing sprint.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_sprint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SprintRepository::new(db);

    assert!(repo.find_with_project(42).await?.is_none());

    Ok(())
}
