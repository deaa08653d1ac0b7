use crate::{
    model::patch::Patch,
    server::{
        data::project::ProjectRepository,
        model::project::{CreateProjectParams, UpdateProjectParams},
        util::pagination::PageRequest,
    },
};
use sea_orm::DbErr;
use std::collections::BTreeSet;
use test_utils::{builder::TestBuilder, factory};

mod missing_ids;
mod update;

/// Tests creating a project and listing it.
///
/// Expected: the page contains the new project
#[tokio::test]
async fn creates_and_lists_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;

    let repo = ProjectRepository::new(db);
    let created = repo
        .create(&CreateProjectParams {
            title: "Search".to_string(),
            department_id: department.id,
        })
        .await?;

    let page = repo
        .get_paginated(PageRequest {
            offset: 0,
            limit: 10,
        })
        .await?;

    assert_eq!(page.count, 1);
    assert_eq!(page.items, vec![created.clone()]);
    assert_eq!(repo.get_by_id(created.id).await?, Some(created));

    Ok(())
}

/// Tests that a project cannot reference a missing department.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn create_fails_for_nonexistent_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo
        .create(&CreateProjectParams {
            title: "Search".to_string(),
            department_id: 999,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_project_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let department = factory::create_department(db).await?;
    let project = factory::create_project(db, department.id).await?;

    let repo = ProjectRepository::new(db);

    assert!(repo.delete(project.id).await?);
    assert!(!repo.delete(project.id).await?);

    Ok(())
}
