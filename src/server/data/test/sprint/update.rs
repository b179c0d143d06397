use super::*;

/// Tests a sparse sprint update.
///
/// Expected: Ok(Some) with goal changed and dates untouched
#[tokio::test]
async fn updates_goal_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, sprint) = create_sprint_with_dependencies(db).await?;

    let repo = SprintRepository::new(db);
    let updated = repo
        .update(
            sprint.id,
            UpdateSprintParams {
                goal: Some("Stabilise".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.goal, "Stabilise");
    assert_eq!(updated.start_date, sprint.start_date);
    assert_eq!(updated.end_date, sprint.end_date);

    Ok(())
}
