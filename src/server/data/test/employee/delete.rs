use super::*;

/// Tests deleting an employee removes its project links.
///
/// Expected: Ok(true), no links left
#[tokio::test]
async fn deletes_employee_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, projects) = factory::helpers::create_department_with_projects(db, 2).await?;
    let employee = factory::employee::EmployeeFactory::new(db)
        .project_ids(projects.iter().map(|p| p.id))
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let deleted = repo.delete(employee.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(employee.id).await?.is_none());
    let links = entity::prelude::EmployeeProject::find()
        .filter(entity::employee_project::Column::EmployeeId.eq(employee.id))
        .count(db)
        .await?;
    assert_eq!(links, 0);

    Ok(())
}

/// Tests deleting an employee that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
