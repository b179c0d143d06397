use super::*;

/// Tests that a second delete of the same sprint affects no rows.
///
/// Expected: Ok(1) then Ok(0)
#[tokio::test]
async fn second_delete_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, sprint) = create_sprint_with_dependencies(db).await?;

    let repo = SprintRepository::new(db);

    assert_eq!(repo.delete(sprint.id).await?, 1);
    assert_eq!(repo.delete(sprint.id).await?, 0);
    assert!(repo.find_by_id(sprint.id).await?.is_none());

    Ok(())
}
