use super::*;

/// Tests creating a sprint and listing it under its project.
///
/// Expected: Ok with sprints returned in start-date order
#[tokio::test]
async fn creates_and_lists_by_project() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let project = factory::create_project(db, manager.id).await?;

    let repo = SprintRepository::new(db);
    let later = repo
        .create(
            project.id,
            CreateSprintParams {
                name: "Second".to_string(),
                goal: String::new(),
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            },
        )
        .await?;
    let earlier = repo
        .create(
            project.id,
            CreateSprintParams {
                name: "First".to_string(),
                goal: "Ship".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
            },
        )
        .await?;

    let sprints = repo.find_by_project_id(project.id).await?;
    let ids: Vec<i32> = sprints.iter().map(|s| s.id).collect();

    assert_eq!(ids, vec![earlier.id, later.id]);
    assert_eq!(sprints[0].project_id, project.id);

    Ok(())
}
