//! Project factory for creating test project entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test projects with customizable fields.
///
/// A project always belongs to a department, so the department ID is required up front.
///
/// # Example
///
/// ```rust,ignore
/// let project = ProjectFactory::new(&db, department.id)
///     .title("Growth Project")
///     .build()
///     .await?;
/// ```
pub struct ProjectFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    department_id: i32,
}

impl<'a> ProjectFactory<'a> {
    /// Creates a new ProjectFactory for the given department.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `department_id` - ID of an existing department
    pub fn new(db: &'a DatabaseConnection, department_id: i32) -> Self {
        Self {
            db,
            title: format!("Project {}", next_id()),
            department_id,
        }
    }

    /// Sets the project title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the project entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::project::Model)` - Created project entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            title: ActiveValue::Set(self.title),
            department_id: ActiveValue::Set(self.department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a project with default values in the given department.
///
/// Shorthand for `ProjectFactory::new(db, department_id).build().await`.
pub async fn create_project(
    db: &DatabaseConnection,
    department_id: i32,
) -> Result<entity::project::Model, DbErr> {
    ProjectFactory::new(db, department_id).build().await
}
