use super::*;

/// Tests looking up credentials by email.
///
/// Expected: Ok(Some) carrying the stored hash
#[tokio::test]
async fn finds_credentials_for_live_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .email("login@example.com")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo
        .find_credentials_by_email("login@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests that deleted users cannot be found by email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .email("gone@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.delete(user.id).await?;

    assert!(repo
        .find_credentials_by_email("gone@example.com")
        .await?
        .is_none());

    Ok(())
}
