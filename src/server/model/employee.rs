//! Employee domain models and parameters.
//!
//! Provides the employee domain model, which carries its preloaded project relation,
//! and the parameter types for the create, full replace and partial update flows.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    model::{
        employee::{CreateEmployeeDto, UpdateEmployeeDto},
        patch::Patch,
    },
    server::{error::validation::ValidationError, schema::input::clean_text},
};

/// Employee together with the projects it belongs to.
///
/// Only built by the repository, which loads `projects` alongside the employee row, so
/// anything rendering an `Employee` never has to go back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub employee: entity::employee::Model,
    /// Related projects, ascending by id and without duplicates.
    pub projects: Vec<entity::project::Model>,
}

impl Employee {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `employee` - The employee row
    /// - `projects` - Project rows linked through `employee_project`, in any order
    pub fn from_entity(
        employee: entity::employee::Model,
        mut projects: Vec<entity::project::Model>,
    ) -> Self {
        projects.sort_by_key(|p| p.id);
        projects.dedup_by_key(|p| p.id);

        Self { employee, projects }
    }
}

/// Parameters for creating an employee.
///
/// Every field has a value; omitted optional input fields arrive here as their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEmployeeParams {
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDate>,
    pub department_id: Option<i32>,
    /// Duplicate ids in the request collapse into one.
    pub project_ids: BTreeSet<i32>,
}

impl CreateEmployeeParams {
    /// Converts a request DTO, normalising text fields.
    ///
    /// # Returns
    /// - `Ok(CreateEmployeeParams)` - Normalised parameters
    /// - `Err(ValidationError)` - A name is blank or too long after trimming
    pub fn from_dto(dto: CreateEmployeeDto) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: clean_text("first_name", dto.first_name)?,
            last_name: clean_text("last_name", dto.last_name)?,
            birthdate: dto.birthdate,
            department_id: dto.department_id,
            project_ids: dto.project_ids.into_iter().collect(),
        })
    }
}

/// Parameters for updating an existing employee.
///
/// `Patch::Unset` fields keep their stored value. A set `project_ids` replaces the
/// whole relation; it is never merged with the stored set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEmployeeParams {
    pub id: i32,
    pub first_name: Patch<String>,
    pub last_name: Patch<String>,
    pub birthdate: Patch<Option<NaiveDate>>,
    pub department_id: Patch<Option<i32>>,
    pub project_ids: Patch<BTreeSet<i32>>,
}

impl UpdateEmployeeParams {
    /// Converts a partial update DTO, normalising the text fields that are present.
    pub fn from_dto(id: i32, dto: UpdateEmployeeDto) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            first_name: dto.first_name.try_map(|v| clean_text("first_name", v))?,
            last_name: dto.last_name.try_map(|v| clean_text("last_name", v))?,
            birthdate: dto.birthdate,
            department_id: dto.department_id,
            project_ids: dto.project_ids.map(|ids| ids.into_iter().collect()),
        })
    }

    /// Builds a full replace: every field is explicitly present, taken from `params`.
    pub fn replacing(id: i32, params: CreateEmployeeParams) -> Self {
        Self {
            id,
            first_name: Patch::Set(params.first_name),
            last_name: Patch::Set(params.last_name),
            birthdate: Patch::Set(params.birthdate),
            department_id: Patch::Set(params.department_id),
            project_ids: Patch::Set(params.project_ids),
        }
    }

    /// Whether any column of the employee row itself is to be written.
    pub fn has_scalar_changes(&self) -> bool {
        self.first_name.is_set()
            || self.last_name.is_set()
            || self.birthdate.is_set()
            || self.department_id.is_set()
    }
}
