use super::*;

/// Tests a valid credential naming an existing user.
///
/// Expected: Authenticated with that user's principal
#[tokio::test]
async fn resolves_existing_principal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .permissions(["add_employee"])
        .build()
        .await?;

    let config = config();
    let authenticator = BearerAuthenticator::new(db, &config);
    let outcome = authenticator
        .authenticate(&format!("supersecret:{}", user.id))
        .await?;

    let AuthOutcome::Authenticated(principal) = outcome else {
        panic!("expected an authenticated principal");
    };
    assert_eq!(principal.user_id(), Some(user.id));
    assert!(principal.has(Capability::AddEmployee));

    Ok(())
}

/// Tests a valid secret with an id that names no user.
///
/// Covers a numeric id with no row, a non-integer id and an empty id.
///
/// Expected: Authenticated(Anonymous), not a rejection
#[tokio::test]
async fn unknown_principal_is_anonymous() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = config();
    let authenticator = BearerAuthenticator::new(db, &config);

    assert_eq!(
        authenticator.authenticate("supersecret:999").await?,
        AuthOutcome::Authenticated(Principal::Anonymous)
    );
    assert_eq!(
        authenticator.authenticate("supersecret:alice").await?,
        AuthOutcome::Authenticated(Principal::Anonymous)
    );
    assert_eq!(
        authenticator.authenticate("supersecret:").await?,
        AuthOutcome::Authenticated(Principal::Anonymous)
    );

    Ok(())
}

/// Tests credentials that must be rejected.
///
/// Expected: Rejected for a wrong secret, a missing delimiter and extra components
#[tokio::test]
async fn rejects_malformed_or_wrong_secret() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let config = config();
    let authenticator = BearerAuthenticator::new(db, &config);

    for credential in [
        format!("wrongsecret:{}", user.id),
        "supersecret".to_string(),
        format!("supersecret:{}:extra", user.id),
        "a:b:c".to_string(),
        ":".to_string(),
        String::new(),
    ] {
        assert_eq!(
            authenticator.authenticate(&credential).await?,
            AuthOutcome::Rejected,
            "credential {:?}",
            credential
        );
    }

    Ok(())
}
