use super::*;

/// Tests that deleting a department deletes its projects and detaches its employees.
///
/// Expected: Ok(true), projects gone, employee kept with no department
#[tokio::test]
async fn cascades_to_projects_and_detaches_employees() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, projects) = factory::helpers::create_department_with_projects(db, 2).await?;
    let employee = factory::employee::EmployeeFactory::new(db)
        .department_id(Some(department.id))
        .project_ids([projects[0].id])
        .build()
        .await?;

    let repo = DepartmentRepository::new(db);
    assert!(repo.delete(department.id).await?);

    assert!(entity::prelude::Project::find().all(db).await?.is_empty());
    assert!(entity::prelude::EmployeeProject::find().all(db).await?.is_empty());

    let stored = entity::prelude::Employee::find_by_id(employee.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.department_id, None);

    Ok(())
}

/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
