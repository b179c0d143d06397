use super::*;

/// Tests a sparse task update and clearing the due date.
///
/// Expected: Ok(Some) with status changed and due date cleared
#[tokio::test]
async fn updates_status_and_clears_due_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let project = factory::create_project(db, manager.id).await?;
    let task = TaskFactory::new(db, project.id)
        .due_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let updated = repo
        .update(
            task.id,
            UpdateTaskParams {
                status: Some(TaskStatus::InProgress),
                due_date: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, TaskStatus::InProgress);
    assert!(updated.due_date.is_none());
    assert_eq!(updated.title, task.title);

    Ok(())
}

/// Tests setting a task's assignee.
///
/// Expected: Ok(Some) with assignee set
#[tokio::test]
async fn sets_assignee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, task) = create_task_with_dependencies(db).await?;
    let member = factory::create_user(db).await?;

    let repo = TaskRepository::new(db);
    let updated = repo.set_assignee(task.id, member.id).await?.unwrap();

    assert_eq!(updated.assignee_id, Some(member.id));

    Ok(())
}
