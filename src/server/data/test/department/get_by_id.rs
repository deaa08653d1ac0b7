use super::*;

/// Tests fetching a department with its projects preloaded.
///
/// Expected: Ok(Some) with only the department's own projects
#[tokio::test]
async fn returns_department_with_own_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, projects) = factory::helpers::create_department_with_projects(db, 2).await?;
    factory::helpers::create_department_with_projects(db, 1).await?;

    let repo = DepartmentRepository::new(db);
    let found = repo.get_by_id(department.id).await?.unwrap();

    assert_eq!(found.department, department);
    assert_eq!(found.projects, projects);

    Ok(())
}

/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);

    assert!(repo.get_by_id(999).await?.is_none());

    Ok(())
}
