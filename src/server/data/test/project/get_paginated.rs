use super::*;

/// Tests filtering projects by name fragment, status and start-date bounds.
///
/// Expected: Ok with each filter narrowing to the matching project
#[tokio::test]
async fn filters_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_manager(db).await?;
    let alpha = ProjectFactory::new(db, manager.id)
        .name("Alpha Launch")
        .start_date(date(2024, 1, 1))
        .build()
        .await?;
    let beta = ProjectFactory::new(db, manager.id)
        .name("Beta")
        .status(ProjectStatus::OnHold)
        .start_date(date(2024, 6, 1))
        .build()
        .await?;

    let repo = ProjectRepository::new(db);

    let (by_name, _) = repo
        .get_paginated(
            &ProjectFilter {
                name: Some("launch".to_string()),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, alpha.id);

    let (by_status, _) = repo
        .get_paginated(
            &ProjectFilter {
                status: Some(ProjectStatus::OnHold),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].id, beta.id);

    let (by_start, total) = repo
        .get_paginated(
            &ProjectFilter {
                start_from: Some(date(2024, 3, 1)),
                start_to: Some(date(2024, 12, 31)),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;
    assert_eq!(total, 1);
    assert_eq!(by_start[0].id, beta.id);

    Ok(())
}
