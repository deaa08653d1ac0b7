//! Department factory for creating test department entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test departments with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let department = DepartmentFactory::new(&db).title("Growth").build().await?;
/// ```
pub struct DepartmentFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
}

impl<'a> DepartmentFactory<'a> {
    /// Creates a new DepartmentFactory with a unique default title.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Department {}", next_id()),
        }
    }

    /// Sets the department title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the department entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::department::Model)` - Created department entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            title: ActiveValue::Set(self.title),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a department with default values.
///
/// Shorthand for `DepartmentFactory::new(db).build().await`.
pub async fn create_department(
    db: &DatabaseConnection,
) -> Result<entity::department::Model, DbErr> {
    DepartmentFactory::new(db).build().await
}
