use super::*;

fn signup(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password: "password123".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role: UserRole::TeamMember,
    }
}

/// Tests creating a user stores the provided hash and no project.
///
/// Expected: Ok with user persisted and unassigned
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(signup("ada@example.com"), "hash".to_string())
        .await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, UserRole::TeamMember);
    assert!(user.current_project_id.is_none());

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.password_hash, "hash");

    Ok(())
}

/// Tests creating two users with the same email.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(signup("dup@example.com"), "hash".to_string())
        .await?;
    let result = repo
        .create(signup("dup@example.com"), "hash".to_string())
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
