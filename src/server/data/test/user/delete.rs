use super::*;

/// Tests soft-deleting a user keeps the row but hides it.
///
/// Expected: Ok(1), then Ok(0) on a second delete
#[tokio::test]
async fn tombstones_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert_eq!(repo.delete(user.id).await?, 1);
    assert_eq!(repo.delete(user.id).await?, 0);

    assert!(repo.find_by_id(user.id).await?.is_none());

    let row = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert!(row.deleted_at.is_some());

    Ok(())
}
