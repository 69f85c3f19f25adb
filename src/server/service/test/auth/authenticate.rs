use super::*;

/// Tests logging in with valid credentials.
///
/// The account is registered through the service so the stored password is a
/// real digest.
///
/// Expected: Ok with the account returned
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(RegisterUserParams {
            username: "clerk".to_string(),
            password: "letmein".to_string(),
            role: Role::User,
        })
        .await?;

    let user = service.authenticate("clerk", "letmein").await?;

    assert_eq!(user.username, "clerk");
    assert_eq!(user.role, Role::User);

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Expected: Err(AppError::AuthErr(AuthError::InvalidCredentials))
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .register(RegisterUserParams {
            username: "clerk".to_string(),
            password: "letmein".to_string(),
            role: Role::User,
        })
        .await?;

    let result = service.authenticate("clerk", "wrong").await;

    let error = result.unwrap_err();
    match error {
        AppError::AuthErr(AuthError::InvalidCredentials) => {}
        _ => panic!("Expected InvalidCredentials, got: {:?}", error),
    }

    Ok(())
}

/// Tests logging in with a username that does not exist.
///
/// Verifies that an unknown username produces the same error as a wrong
/// password, so the response does not reveal which usernames are registered.
///
/// Expected: Err(AppError::AuthErr(AuthError::InvalidCredentials))
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let result = service.authenticate("nobody", "whatever").await;

    let error = result.unwrap_err();
    match error {
        AppError::AuthErr(AuthError::InvalidCredentials) => {}
        _ => panic!("Expected InvalidCredentials, got: {:?}", error),
    }

    Ok(())
}
