use super::*;

/// Tests creating a staff account.
///
/// Verifies that the repository stores the username, the digest it was
/// handed, and the role serialized to its string form.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user_with_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "frontdesk".to_string(),
            "digest-value".to_string(),
            Role::Admin,
        )
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "frontdesk");
    assert_eq!(user.password, "digest-value");
    assert_eq!(user.role, "admin");

    Ok(())
}

/// Tests the unique constraint on the username column.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("desk")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create("desk".to_string(), "digest".to_string(), Role::User)
        .await;

    assert!(result.is_err());

    Ok(())
}
