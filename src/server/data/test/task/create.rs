use super::*;

/// Tests creating a task inside a sprint.
///
/// Expected: Ok with project and sprint ids as given and no assignee
#[tokio::test]
async fn creates_task_in_sprint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, project, sprint) =
        test_utils::factory::helpers::create_sprint_with_dependencies(db).await?;

    let repo = TaskRepository::new(db);
    let task = repo
        .create(
            project.id,
            Some(sprint.id),
            CreateTaskParams {
                title: "Write docs".to_string(),
                description: String::new(),
                status: TaskStatus::ToDo,
                priority: TaskPriority::High,
                due_date: None,
            },
        )
        .await?;

    assert_eq!(task.project_id, project.id);
    assert_eq!(task.sprint_id, Some(sprint.id));
    assert!(task.assignee_id.is_none());
    assert_eq!(task.priority, TaskPriority::High);

    Ok(())
}
