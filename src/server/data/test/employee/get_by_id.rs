use super::*;

/// Tests fetching an employee with its projects preloaded.
///
/// Expected: Ok(Some) with projects ascending by id
#[tokio::test]
async fn returns_employee_with_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, projects) = factory::helpers::create_department_with_projects(db, 3).await?;
    let employee = factory::employee::EmployeeFactory::new(db)
        .department_id(Some(department.id))
        .project_ids([projects[2].id, projects[0].id])
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let result = repo.get_by_id(employee.id).await?;

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.employee, employee);
    let ids: Vec<i32> = found.projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![projects[0].id, projects[2].id]);

    Ok(())
}

/// Tests fetching an employee that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_employee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let result = repo.get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
