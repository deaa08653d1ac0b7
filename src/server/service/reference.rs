//! Checks that relation references point at existing rows.
//!
//! Run before any write so that a dangling reference fails the whole request and leaves
//! the store untouched.

use std::collections::BTreeSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{department::DepartmentRepository, project::ProjectRepository},
    error::{validation::ValidationError, AppError},
};

/// Fails with a `department_id` validation error if the department does not exist.
pub async fn ensure_department(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    if !DepartmentRepository::new(db).exists(id).await? {
        return Err(ValidationError::new(
            "department_id",
            format!("Department {} does not exist", id),
        )
        .into());
    }

    Ok(())
}

/// Fails with a `project_ids` validation error naming every project that does not exist.
pub async fn ensure_projects(db: &DatabaseConnection, ids: &BTreeSet<i32>) -> Result<(), AppError> {
    let missing = ProjectRepository::new(db).missing_ids(ids).await?;

    if !missing.is_empty() {
        let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();

        return Err(ValidationError::new(
            "project_ids",
            format!("Projects do not exist: {}", missing.join(", ")),
        )
        .into());
    }

    Ok(())
}
