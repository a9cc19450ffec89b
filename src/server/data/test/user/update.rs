use super::*;

/// Tests applying a partial update.
///
/// Verifies that only the listed fields change.
///
/// Expected: Ok(true) with the new name and email, password untouched
#[tokio::test]
async fn updates_only_listed_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo
        .update(
            &user.id,
            vec![
                UserField::FirstName("Janet".to_string()),
                UserField::Email("janet@example.com".to_string()),
            ],
        )
        .await?;

    assert!(found);

    let stored = repo.find_by_id(&user.id).await?.unwrap();
    assert_eq!(stored.first_name, "Janet");
    assert_eq!(stored.email, "janet@example.com");
    assert_eq!(stored.last_name, user.last_name);
    assert_eq!(stored.encrypted_password, user.encrypted_password);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo
        .update(
            "00000000-0000-0000-0000-00000000dead",
            vec![UserField::LastName("Smith".to_string())],
        )
        .await?;

    assert!(!found);

    Ok(())
}
