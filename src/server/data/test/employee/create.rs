use super::*;

/// Tests inserting an employee row with every scalar field set.
///
/// Expected: Ok with the stored row and a store-assigned id
#[tokio::test]
async fn creates_employee_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = EmployeeRepository::new(db);
    let employee = repo
        .create(&CreateEmployeeParams {
            birthdate: NaiveDate::from_ymd_opt(1815, 12, 10),
            department_id: Some(department.id),
            ..params("Ada", "Lovelace")
        })
        .await?;

    assert!(employee.id > 0);
    assert_eq!(employee.first_name, "Ada");
    assert_eq!(employee.last_name, "Lovelace");
    assert_eq!(employee.birthdate, NaiveDate::from_ymd_opt(1815, 12, 10));
    assert_eq!(employee.department_id, Some(department.id));

    Ok(())
}

/// Tests that create does not write project links.
///
/// Expected: no employee_project rows until `replace_projects` runs
#[tokio::test]
async fn does_not_write_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, projects) = factory::helpers::create_department_with_projects(db, 1).await?;

    let repo = EmployeeRepository::new(db);
    repo.create(&CreateEmployeeParams {
        project_ids: BTreeSet::from([projects[0].id]),
        ..params("Ada", "Lovelace")
    })
    .await?;

    let links = entity::prelude::EmployeeProject::find().count(db).await?;
    assert_eq!(links, 0);

    Ok(())
}

/// Tests that a dangling department reference is refused by the foreign key.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_nonexistent_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let result = repo
        .create(&CreateEmployeeParams {
            department_id: Some(999),
            ..params("Ada", "Lovelace")
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
