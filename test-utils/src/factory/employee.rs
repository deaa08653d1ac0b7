//! Employee factory for creating test employee entities.
//!
//! Besides the employee row itself the factory can link the employee to existing
//! projects through the `employee_project` junction table.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating test employees with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let employee = EmployeeFactory::new(&db)
///     .first_name("Ada")
///     .last_name("Lovelace")
///     .department_id(Some(department.id))
///     .project_ids([project.id])
///     .build()
///     .await?;
/// ```
pub struct EmployeeFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    birthdate: Option<NaiveDate>,
    department_id: Option<i32>,
    project_ids: Vec<i32>,
}

impl<'a> EmployeeFactory<'a> {
    /// Creates a new EmployeeFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First {id}"`, last_name: `"Last {id}"`
    /// - no birthdate, no department, no projects
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            birthdate: None,
            department_id: None,
            project_ids: Vec::new(),
        }
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the birthdate.
    pub fn birthdate(mut self, birthdate: Option<NaiveDate>) -> Self {
        self.birthdate = birthdate;
        self
    }

    /// Sets the department reference. The department must exist.
    pub fn department_id(mut self, department_id: Option<i32>) -> Self {
        self.department_id = department_id;
        self
    }

    /// Sets the projects the employee is linked to. The projects must exist.
    pub fn project_ids(mut self, project_ids: impl IntoIterator<Item = i32>) -> Self {
        self.project_ids = project_ids.into_iter().collect();
        self
    }

    /// Builds and inserts the employee and its project links into the database.
    ///
    /// # Returns
    /// - `Ok(entity::employee::Model)` - Created employee entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::employee::Model, DbErr> {
        let employee = entity::employee::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            birthdate: ActiveValue::Set(self.birthdate),
            department_id: ActiveValue::Set(self.department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !self.project_ids.is_empty() {
            entity::prelude::EmployeeProject::insert_many(self.project_ids.into_iter().map(
                |project_id| entity::employee_project::ActiveModel {
                    employee_id: ActiveValue::Set(employee.id),
                    project_id: ActiveValue::Set(project_id),
                },
            ))
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(employee)
    }
}

/// Creates an employee with default values and no relations.
///
/// Shorthand for `EmployeeFactory::new(db).build().await`.
pub async fn create_employee(db: &DatabaseConnection) -> Result<entity::employee::Model, DbErr> {
    EmployeeFactory::new(db).build().await
}
