use super::*;

/// Tests moving a project to another department while keeping its title.
///
/// Expected: department_id changes, title unchanged
#[tokio::test]
async fn moves_project_between_departments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_company_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_department(db).await?;
    let to = factory::create_department(db).await?;
    let project = factory::create_project(db, from.id).await?;

    let repo = ProjectRepository::new(db);
    let updated = repo
        .update(
            project.clone(),
            &UpdateProjectParams {
                id: project.id,
                title: Patch::Unset,
                department_id: Patch::Set(to.id),
            },
        )
        .await?;

    assert_eq!(updated.title, project.title);
    assert_eq!(updated.department_id, to.id);

    Ok(())
}
