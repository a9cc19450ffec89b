use super::*;

/// Tests looking a user up by email.
///
/// Expected: Ok(Some) for a known email, Ok(None) otherwise
#[tokio::test]
async fn find_by_email_matches_exact_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("known@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_email("known@example.com").await?;
    let missing = repo.find_by_email("unknown@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(missing.is_none());

    Ok(())
}

/// Tests listing all users.
///
/// Expected: Ok with users ordered by email
#[tokio::test]
async fn find_all_orders_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("zed@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("amy@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo.find_all().await?;

    let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["amy@example.com", "zed@example.com"]);

    Ok(())
}
