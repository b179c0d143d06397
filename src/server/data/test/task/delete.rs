use super::*;

/// Tests soft-deleting a task.
///
/// Expected: Ok(1), then the task is no longer found
#[tokio::test]
async fn deletes_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, task) = create_task_with_dependencies(db).await?;

    let repo = TaskRepository::new(db);

    assert_eq!(repo.delete(task.id).await?, 1);
    assert!(repo.find_by_id(task.id).await?.is_none());
    assert!(repo.find_with_project(task.id).await?.is_none());
    assert_eq!(repo.delete(task.id).await?, 0);

    Ok(())
}
