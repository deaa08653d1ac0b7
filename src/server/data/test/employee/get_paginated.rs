use super::*;

/// Tests that a page reports the full count and carries each employee's projects.
///
/// Expected: second page of size 2 out of 5, projects preloaded per row
#[tokio::test]
async fn returns_page_with_projects_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, projects) = factory::helpers::create_department_with_projects(db, 2).await?;

    let mut employees = Vec::new();
    for i in 0..5 {
        let project_ids: Vec<i32> = projects.iter().take(i % 3).map(|p| p.id).collect();
        employees.push(
            factory::employee::EmployeeFactory::new(db)
                .project_ids(project_ids)
                .build()
                .await?,
        );
    }

    let repo = EmployeeRepository::new(db);
    let page = repo
        .get_paginated(PageRequest {
            offset: 2,
            limit: 2,
        })
        .await?;

    assert_eq!(page.count, 5);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].employee, employees[2]);
    assert_eq!(page.items[1].employee, employees[3]);
    assert_eq!(page.items[0].projects.len(), 2);
    assert!(page.items[1].projects.is_empty());

    Ok(())
}

/// Tests an offset past the last employee.
///
/// Expected: no items, count still reports every employee
#[tokio::test]
async fn offset_past_end_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_employee(db).await?;
    factory::create_employee(db).await?;

    let repo = EmployeeRepository::new(db);
    let page = repo
        .get_paginated(PageRequest {
            offset: 10,
            limit: 5,
        })
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.count, 2);

    Ok(())
}
