use sea_orm::DatabaseConnection;

use crate::server::{
    config::PaginationConfig,
    data::department::DepartmentRepository,
    error::AppError,
    model::{
        department::{CreateDepartmentParams, Department, UpdateDepartmentParams},
        principal::{Capability, Principal},
    },
    util::pagination::{Page, PageRequest},
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
    pagination: PaginationConfig,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, pagination: PaginationConfig) -> Self {
        Self { db, pagination }
    }

    pub async fn list(
        &self,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Page<Department>, AppError> {
        let request = PageRequest::new(offset, limit, &self.pagination);

        Ok(DepartmentRepository::new(self.db)
            .get_paginated(request)
            .await?)
    }

    pub async fn get(&self, id: i32) -> Result<Department, AppError> {
        DepartmentRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(
        &self,
        principal: &Principal,
        params: CreateDepartmentParams,
    ) -> Result<Department, AppError> {
        principal.require(&[Capability::AddDepartment])?;

        let department = DepartmentRepository::new(self.db).create(&params).await?;

        tracing::info!("Created department {}", department.id);

        // A new department owns no projects yet
        Ok(Department::from_entity(department, Vec::new()))
    }

    /// Applies a partial update; an unset title leaves the department unchanged.
    pub async fn update(
        &self,
        principal: &Principal,
        params: UpdateDepartmentParams,
    ) -> Result<Department, AppError> {
        principal.require(&[Capability::ChangeDepartment])?;

        let repo = DepartmentRepository::new(self.db);
        let current = repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| not_found(params.id))?;

        let department = repo.update(current.department, &params).await?;

        if params.title.is_set() {
            tracing::info!("Updated department {}", params.id);
        }

        Ok(Department::from_entity(department, current.projects))
    }

    /// Deletes a department together with its projects.
    pub async fn delete(&self, principal: &Principal, id: i32) -> Result<(), AppError> {
        principal.require(&[Capability::DeleteDepartment])?;

        if !DepartmentRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted department {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Department {} not found", id))
}
