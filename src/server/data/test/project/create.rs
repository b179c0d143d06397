use super::*;

/// Tests creating a project records the given manager.
///
/// Expected: Ok with project persisted under the manager
#[tokio::test]
async fn creates_project_for_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(
            manager.id,
            CreateProjectParams {
                name: "Apollo".to_string(),
                description: "Moon".to_string(),
                status: ProjectStatus::Active,
                start_date: date(2024, 1, 1),
                end_date: Some(date(2024, 12, 31)),
            },
        )
        .await?;

    assert_eq!(project.manager_id, manager.id);
    assert_eq!(project.name, "Apollo");
    assert_eq!(project.end_date, Some(date(2024, 12, 31)));

    let found = repo.find_by_id(project.id).await?;
    assert_eq!(found, Some(project));

    Ok(())
}
