use super::*;

/// Tests reporting which of the requested ids do not exist.
///
/// Expected: only the unknown ids, ascending
#[tokio::test]
async fn returns_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, projects) = factory::helpers::create_department_with_projects(db, 2).await?;

    let repo = ProjectRepository::new(db);
    let missing = repo
        .missing_ids(&BTreeSet::from([projects[0].id, 998, projects[1].id, 999]))
        .await?;

    assert_eq!(missing, vec![998, 999]);

    Ok(())
}

/// Expected: empty result without touching the table
#[tokio::test]
async fn empty_set_has_nothing_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);

    assert!(repo.missing_ids(&BTreeSet::new()).await?.is_empty());

    Ok(())
}
