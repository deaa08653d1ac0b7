use sea_orm::DatabaseConnection;

use crate::{
    model::patch::Patch,
    server::{
        config::PaginationConfig,
        data::employee::EmployeeRepository,
        error::AppError,
        model::{
            employee::{CreateEmployeeParams, Employee, UpdateEmployeeParams},
            principal::{Capability, Principal},
        },
        service::reference::{ensure_department, ensure_projects},
        util::pagination::{Page, PageRequest},
    },
};

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
    pagination: PaginationConfig,
}

impl<'a> EmployeeService<'a> {
    pub fn new(db: &'a DatabaseConnection, pagination: PaginationConfig) -> Self {
        Self { db, pagination }
    }

    /// Gets a page of employees with their projects.
    ///
    /// Out of range `offset`/`limit` values are clamped, see `PageRequest::new`.
    pub async fn list(
        &self,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Page<Employee>, AppError> {
        let request = PageRequest::new(offset, limit, &self.pagination);

        Ok(EmployeeRepository::new(self.db).get_paginated(request).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Employee, AppError> {
        EmployeeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates an employee and links its projects.
    ///
    /// References are checked before anything is written. The employee row and its project
    /// links are written in two steps; if the second fails the employee already exists and
    /// `AppError::IncompleteWrite` carries its id.
    ///
    /// # Returns
    /// - `Ok(Employee)` - The created employee with its projects
    /// - `Err(AppError::AuthErr)` - Principal lacks `add_employee`
    /// - `Err(AppError::Validation)` - Department or a project does not exist
    /// - `Err(AppError::IncompleteWrite)` - Employee created, project links not written
    pub async fn create(
        &self,
        principal: &Principal,
        params: CreateEmployeeParams,
    ) -> Result<Employee, AppError> {
        principal.require(&[Capability::AddEmployee])?;

        if let Some(department_id) = params.department_id {
            ensure_department(self.db, department_id).await?;
        }
        ensure_projects(self.db, &params.project_ids).await?;

        let repo = EmployeeRepository::new(self.db);
        let employee = repo.create(&params).await?;

        if !params.project_ids.is_empty() {
            repo.replace_projects(employee.id, &params.project_ids)
                .await
                .map_err(|source| AppError::IncompleteWrite {
                    kind: "Employee",
                    id: employee.id,
                    relation: "project_ids",
                    source,
                })?;
        }

        tracing::info!("Created employee {}", employee.id);

        repo.get_by_id(employee.id)
            .await?
            .ok_or_else(|| not_found(employee.id))
    }

    /// Applies a partial update.
    ///
    /// Fields left `Unset` keep their stored values and an unset `project_ids` leaves the
    /// relation untouched; a set `project_ids` replaces it entirely. Every reference is
    /// checked before the first write, so a bad reference leaves the employee unchanged. The
    /// row and relation writes commit together; if either fails neither is kept.
    /// An update with no fields set writes nothing and returns the stored employee.
    pub async fn update(
        &self,
        principal: &Principal,
        params: UpdateEmployeeParams,
    ) -> Result<Employee, AppError> {
        principal.require(&[Capability::ChangeEmployee])?;

        let repo = EmployeeRepository::new(self.db);
        let current = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| not_found(params.id))?;

        if let Patch::Set(Some(department_id)) = params.department_id {
            ensure_department(self.db, department_id).await?;
        }
        if let Patch::Set(project_ids) = &params.project_ids {
            ensure_projects(self.db, project_ids).await?;
        }

        repo.update(current, &params).await?;

        if params.has_scalar_changes() || params.project_ids.is_set() {
            tracing::info!("Updated employee {}", params.id);
        }

        repo.get_by_id(params.id).await?.ok_or_else(|| not_found(params.id))
    }

    /// Replaces every field of an employee, omitted optional fields taking their defaults.
    pub async fn replace(
        &self,
        principal: &Principal,
        id: i32,
        params: CreateEmployeeParams,
    ) -> Result<Employee, AppError> {
        self.update(principal, UpdateEmployeeParams::replacing(id, params)).await
    }

    pub async fn delete(&self, principal: &Principal, id: i32) -> Result<(), AppError> {
        principal.require(&[Capability::DeleteEmployee])?;

        if !EmployeeRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted employee {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Employee {} not found", id))
}
