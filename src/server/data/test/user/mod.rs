use crate::server::{
    data::user::UserRepository,
    model::principal::{Capability, Principal},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests resolving a user with grants to a principal.
///
/// Expected: Ok(Some) holding exactly the granted capabilities
#[tokio::test]
async fn finds_principal_with_capabilities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .permissions(["add_employee", "change_employee"])
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let principal = repo.find_principal(user.id).await?.unwrap();

    assert_eq!(principal.user_id(), Some(user.id));
    assert!(principal.has(Capability::AddEmployee));
    assert!(principal.has(Capability::ChangeEmployee));
    assert!(!principal.has(Capability::DeleteEmployee));

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_principal(999).await?, None::<Principal>);

    Ok(())
}

/// Tests that granting twice does not fail on the primary key.
///
/// Expected: Ok, capability held once
#[tokio::test]
async fn grant_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create("grantee", false).await?;

    repo.grant(user.id, &[Capability::AddProject]).await?;
    repo.grant(user.id, &[Capability::AddProject, Capability::DeleteProject])
        .await?;

    let principal = repo.find_principal(user.id).await?.unwrap();
    assert!(principal.has(Capability::AddProject));
    assert!(principal.has(Capability::DeleteProject));
    assert_eq!(
        repo.find_by_username("grantee").await?.map(|u| u.id),
        Some(user.id)
    );

    Ok(())
}
