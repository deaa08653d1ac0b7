use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::patch::Patch,
    server::{
        model::department::{CreateDepartmentParams, Department, UpdateDepartmentParams},
        util::pagination::{paginate, Page, PageRequest, QuerySource},
    },
};

pub struct DepartmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &CreateDepartmentParams,
    ) -> Result<entity::department::Model, DbErr> {
        entity::department::ActiveModel {
            title: ActiveValue::Set(params.title.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find_by_id(id).one(self.db).await
    }

    /// Gets a department by ID with its projects preloaded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Department>, DbErr> {
        let Some(department) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let projects = department
            .find_related(entity::prelude::Project)
            .all(self.db)
            .await?;

        Ok(Some(Department::from_entity(department, projects)))
    }

    /// Checks whether a department with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Department::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(
        &self,
        current: entity::department::Model,
        params: &UpdateDepartmentParams,
    ) -> Result<entity::department::Model, DbErr> {
        let Patch::Set(title) = &params.title else {
            return Ok(current);
        };

        let mut department: entity::department::ActiveModel = current.into();
        department.title = ActiveValue::Set(title.clone());

        department.update(self.db).await
    }

    /// Gets one page of departments ordered by ID, with projects preloaded for the page.
    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<Department>, DbErr> {
        let query =
            entity::prelude::Department::find().order_by_asc(entity::department::Column::Id);
        let page = paginate(QuerySource::new(self.db, query), request).await?;

        let ids: Vec<i32> = page.items.iter().map(|d| d.id).collect();
        let mut projects: HashMap<i32, Vec<entity::project::Model>> = HashMap::new();

        if !ids.is_empty() {
            for project in entity::prelude::Project::find()
                .filter(entity::project::Column::DepartmentId.is_in(ids))
                .all(self.db)
                .await?
            {
                projects.entry(project.department_id).or_default().push(project);
            }
        }

        Ok(page.map(|department| {
            let related = projects.remove(&department.id).unwrap_or_default();
            Department::from_entity(department, related)
        }))
    }

    /// Deletes a department. Its projects are deleted with it and its employees are left
    /// without a department.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Department::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
