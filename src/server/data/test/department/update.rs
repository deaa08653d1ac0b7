use super::*;

/// Tests renaming a department.
///
/// Expected: Ok with the new title stored
#[tokio::test]
async fn updates_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = DepartmentRepository::new(db);
    let updated = repo
        .update(
            department.clone(),
            &UpdateDepartmentParams {
                id: department.id,
                title: Patch::Set("Infrastructure".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.title, "Infrastructure");
    assert_eq!(repo.find_by_id(department.id).await?.unwrap(), updated);

    Ok(())
}

/// Expected: Ok with the row unchanged
#[tokio::test]
async fn unset_title_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = DepartmentRepository::new(db);
    let updated = repo
        .update(
            department.clone(),
            &UpdateDepartmentParams {
                id: department.id,
                title: Patch::Unset,
            },
        )
        .await?;

    assert_eq!(updated, department);

    Ok(())
}
