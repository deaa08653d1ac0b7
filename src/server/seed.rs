//! Demo data for a fresh database.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        department::DepartmentRepository, employee::EmployeeRepository,
        project::ProjectRepository, user::UserRepository,
    },
    middleware::auth::CREDENTIAL_DELIMITER,
    model::{
        department::CreateDepartmentParams, employee::CreateEmployeeParams,
        project::CreateProjectParams,
    },
};

pub const DEMO_USERNAME: &str = "testuser";

/// Inserts a superuser, two departments with a project each, and one employee on both
/// projects.
///
/// Does nothing when the demo user already exists, so it is safe to run on every start.
///
/// # Returns
/// - `Ok(true)` - Demo data inserted
/// - `Ok(false)` - Already seeded
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let users = UserRepository::new(db);

    if users.find_by_username(DEMO_USERNAME).await?.is_some() {
        tracing::info!("Demo data already present, skipping seed");
        return Ok(false);
    }

    let user = users.create(DEMO_USERNAME, true).await?;

    let departments = DepartmentRepository::new(db);
    let growth = departments
        .create(&CreateDepartmentParams {
            title: "Growth".to_string(),
        })
        .await?;
    let infrastructure = departments
        .create(&CreateDepartmentParams {
            title: "Infrastructure".to_string(),
        })
        .await?;

    let projects = ProjectRepository::new(db);
    let conversion = projects
        .create(&CreateProjectParams {
            title: "Conversion Funnel".to_string(),
            department_id: growth.id,
        })
        .await?;
    let platform = projects
        .create(&CreateProjectParams {
            title: "Platform Migration".to_string(),
            department_id: infrastructure.id,
        })
        .await?;

    let employees = EmployeeRepository::new(db);
    let params = CreateEmployeeParams {
        first_name: "Bob".to_string(),
        last_name: "Smith".to_string(),
        birthdate: Some(Utc::now().date_naive()),
        department_id: Some(growth.id),
        project_ids: [conversion.id, platform.id].into_iter().collect(),
    };
    let bob = employees.create(&params).await?;
    employees.replace_projects(bob.id, &params.project_ids).await?;

    tracing::info!(
        "Seeded demo data; authenticate with 'Authorization: Bearer <AUTH_SHARED_SECRET>{}{}'",
        CREDENTIAL_DELIMITER,
        user.id
    );

    Ok(true)
}
