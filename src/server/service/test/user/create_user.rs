use super::*;

/// Tests that signing up twice with one email is rejected.
///
/// Expected: Err(DomainError::EmailAlreadyExists)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    service
        .create_user(signup("taken@example.com", "password123"))
        .await?;

    let result = service
        .create_user(signup("taken@example.com", "password123"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::EmailAlreadyExists(_)))
    ));

    Ok(())
}

/// Tests that signup cannot create an administrator.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn refuses_admin_signup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = signup("root@example.com", "password123");
    params.role = UserRole::Admin;

    let result = UserService::new(db).create_user(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that an overlong password is refused before anything is stored.
///
/// Expected: Err(AuthError::PasswordTooLong)
#[tokio::test]
async fn refuses_overlong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let password = "x".repeat(73);
    let result = UserService::new(db)
        .create_user(signup("long@example.com", &password))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PasswordTooLong { .. }))
    ));

    Ok(())
}
