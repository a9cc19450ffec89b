use super::*;

/// Tests creating a user.
///
/// Verifies that the repository generates an id and stores every field, including the
/// already hashed password.
///
/// Expected: Ok(User) readable through find_by_id
#[tokio::test]
async fn creates_user_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(new_user("jane@example.com")).await?;

    assert!(!user.id.is_empty());
    assert_eq!(user.first_name, "Jane");
    assert_eq!(user.last_name, "Doe");
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.encrypted_password, "$argon2id$stub");
    assert!(!user.is_admin);

    let stored = repo.find_by_id(&user.id).await?;
    assert_eq!(stored, Some(user));

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(new_user("jane@example.com")).await?;
    let result = repo.create(new_user("jane@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
