use super::*;

async fn linked_project_ids(
    db: &sea_orm::DatabaseConnection,
    employee_id: i32,
) -> Result<Vec<i32>, DbErr> {
    let mut ids: Vec<i32> = entity::prelude::EmployeeProject::find()
        .filter(entity::employee_project::Column::EmployeeId.eq(employee_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.project_id)
        .collect();
    ids.sort();

    Ok(ids)
}

/// Tests that the new set replaces the old one rather than merging into it.
///
/// Expected: {1,2,3} replaced with {3} leaves only {3}
#[tokio::test]
async fn replaces_instead_of_merging() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, projects) = factory::helpers::create_department_with_projects(db, 3).await?;
    let employee = factory::employee::EmployeeFactory::new(db)
        .project_ids(projects.iter().map(|p| p.id))
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    repo.replace_projects(employee.id, &BTreeSet::from([projects[2].id]))
        .await?;

    assert_eq!(linked_project_ids(db, employee.id).await?, vec![projects[2].id]);

    Ok(())
}

/// Tests that an empty set clears the relation.
///
/// Expected: no links remain
#[tokio::test]
async fn empty_set_clears_projects() -> Result<(), DbErr> {
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
    repo.replace_projects(employee.id, &BTreeSet::new()).await?;

    assert!(linked_project_ids(db, employee.id).await?.is_empty());

    Ok(())
}

/// Tests that other employees' links are untouched.
///
/// Expected: the second employee keeps its project
#[tokio::test]
async fn leaves_other_employees_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, projects) = factory::helpers::create_department_with_projects(db, 2).await?;
    let first = factory::employee::EmployeeFactory::new(db)
        .project_ids([projects[0].id])
        .build()
        .await?;
    let second = factory::employee::EmployeeFactory::new(db)
        .project_ids([projects[0].id])
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    repo.replace_projects(first.id, &BTreeSet::from([projects[1].id]))
        .await?;

    assert_eq!(linked_project_ids(db, first.id).await?, vec![projects[1].id]);
    assert_eq!(linked_project_ids(db, second.id).await?, vec![projects[0].id]);

    Ok(())
}

/// Tests that a failed insert rolls back the delete.
///
/// Expected: Err, original links intact
#[tokio::test]
async fn failure_keeps_previous_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, projects) = factory::helpers::create_department_with_projects(db, 1).await?;
    let employee = factory::employee::EmployeeFactory::new(db)
        .project_ids([projects[0].id])
        .build()
        .await?;

    let repo = EmployeeRepository::new(db);
    let result = repo
        .replace_projects(employee.id, &BTreeSet::from([999]))
        .await;

    assert!(result.is_err());
    assert_eq!(linked_project_ids(db, employee.id).await?, vec![projects[0].id]);

    Ok(())
}
