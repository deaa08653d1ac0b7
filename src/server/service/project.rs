use sea_orm::DatabaseConnection;

use crate::{
    model::patch::Patch,
    server::{
        config::PaginationConfig,
        data::project::ProjectRepository,
        error::AppError,
        model::{
            principal::{Capability, Principal},
            project::{CreateProjectParams, UpdateProjectParams},
        },
        service::reference::ensure_department,
        util::pagination::{Page, PageRequest},
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
    pagination: PaginationConfig,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection, pagination: PaginationConfig) -> Self {
        Self { db, pagination }
    }

    pub async fn list(
        &self,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Page<entity::project::Model>, AppError> {
        let request = PageRequest::new(offset, limit, &self.pagination);

        Ok(ProjectRepository::new(self.db).get_paginated(request).await?)
    }

    pub async fn get(&self, id: i32) -> Result<entity::project::Model, AppError> {
        ProjectRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(
        &self,
        principal: &Principal,
        params: CreateProjectParams,
    ) -> Result<entity::project::Model, AppError> {
        principal.require(&[Capability::AddProject])?;

        ensure_department(self.db, params.department_id).await?;

        let project = ProjectRepository::new(self.db).create(&params).await?;

        tracing::info!("Created project {}", project.id);

        Ok(project)
    }

    pub async fn update(
        &self,
        principal: &Principal,
        params: UpdateProjectParams,
    ) -> Result<entity::project::Model, AppError> {
        principal.require(&[Capability::ChangeProject])?;

        let repo = ProjectRepository::new(self.db);
        let current = repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| not_found(params.id))?;

        if let Patch::Set(department_id) = params.department_id {
            ensure_department(self.db, department_id).await?;
        }

        let project = repo.update(current, &params).await?;

        if params.title.is_set() || params.department_id.is_set() {
            tracing::info!("Updated project {}", params.id);
        }

        Ok(project)
    }

    /// Deletes a project, unlinking it from every employee.
    pub async fn delete(&self, principal: &Principal, id: i32) -> Result<(), AppError> {
        principal.require(&[Capability::DeleteProject])?;

        if !ProjectRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted project {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Project {} not found", id))
}
