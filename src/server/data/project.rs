use std::collections::{BTreeSet, HashSet};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::patch::Patch,
    server::{
        model::project::{CreateProjectParams, UpdateProjectParams},
        util::pagination::{paginate, Page, PageRequest, QuerySource},
    },
};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: &CreateProjectParams,
    ) -> Result<entity::project::Model, DbErr> {
        entity::project::ActiveModel {
            title: ActiveValue::Set(params.title.clone()),
            department_id: ActiveValue::Set(params.department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(id).one(self.db).await
    }

    /// Returns the IDs in `ids` that match no project, ascending.
    ///
    /// Issues one query regardless of how many IDs are checked.
    pub async fn missing_ids(&self, ids: &BTreeSet<i32>) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashSet<i32> = entity::prelude::Project::find()
            .select_only()
            .column(entity::project::Column::Id)
            .filter(entity::project::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }

    pub async fn update(
        &self,
        current: entity::project::Model,
        params: &UpdateProjectParams,
    ) -> Result<entity::project::Model, DbErr> {
        if params.title.is_unset() && params.department_id.is_unset() {
            return Ok(current);
        }

        let mut project: entity::project::ActiveModel = current.into();

        if let Patch::Set(title) = &params.title {
            project.title = ActiveValue::Set(title.clone());
        }
        if let Patch::Set(department_id) = params.department_id {
            project.department_id = ActiveValue::Set(department_id);
        }

        project.update(self.db).await
    }

    /// Gets one page of projects ordered by ID.
    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<Page<entity::project::Model>, DbErr> {
        let query = entity::prelude::Project::find().order_by_asc(entity::project::Column::Id);

        paginate(QuerySource::new(self.db, query), request).await
    }

    /// Deletes a project; employee links cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Project::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
