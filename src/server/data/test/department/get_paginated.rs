use super::*;

/// Tests that each department on the page carries its own projects.
///
/// Expected: count of all departments, projects grouped per department
#[tokio::test]
async fn returns_page_with_grouped_projects() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, first_projects) = factory::helpers::create_department_with_projects(db, 2).await?;
    let (second, _) = factory::helpers::create_department_with_projects(db, 0).await?;
    factory::helpers::create_department_with_projects(db, 1).await?;

    let repo = DepartmentRepository::new(db);
    let page = repo
        .get_paginated(PageRequest {
            offset: 0,
            limit: 2,
        })
        .await?;

    assert_eq!(page.count, 3);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].department, first);
    assert_eq!(page.items[0].projects, first_projects);
    assert_eq!(page.items[1].department, second);
    assert!(page.items[1].projects.is_empty());

    Ok(())
}
