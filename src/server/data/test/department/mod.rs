use crate::{
    model::patch::Patch,
    server::{
        data::department::DepartmentRepository,
        model::department::{CreateDepartmentParams, UpdateDepartmentParams},
        util::pagination::PageRequest,
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_by_id;
mod get_paginated;
mod update;

/// Tests that a created department can be read back by id.
///
/// Expected: Ok with the same row, no projects
#[tokio::test]
async fn creates_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    let created = repo
        .create(&CreateDepartmentParams {
            title: "Growth".to_string(),
        })
        .await?;

    let found = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(found.department, created);
    assert!(found.projects.is_empty());
    assert!(repo.exists(created.id).await?);
    assert!(!repo.exists(created.id + 1).await?);

    Ok(())
}
