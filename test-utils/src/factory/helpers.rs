//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique name generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a department together with `count` projects belonging to it.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of projects to create
///
/// # Returns
/// - `Ok((department, projects))` - Created department and its projects in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_department_with_projects(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::department::Model, Vec<entity::project::Model>), DbErr> {
    let department = crate::factory::department::create_department(db).await?;

    let mut projects = Vec::with_capacity(count);
    for _ in 0..count {
        projects.push(crate::factory::project::create_project(db, department.id).await?);
    }

    Ok((department, projects))
}
