use std::collections::{BTreeSet, HashMap};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    model::patch::Patch,
    server::{
        model::employee::{CreateEmployeeParams, Employee, UpdateEmployeeParams},
        util::pagination::{paginate, Page, PageRequest, QuerySource},
    },
};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the employee row.
    ///
    /// Project links are not written here; see `replace_projects`.
    pub async fn create(
        &self,
        params: &CreateEmployeeParams,
    ) -> Result<entity::employee::Model, DbErr> {
        entity::employee::ActiveModel {
            first_name: ActiveValue::Set(params.first_name.clone()),
            last_name: ActiveValue::Set(params.last_name.clone()),
            birthdate: ActiveValue::Set(params.birthdate),
            department_id: ActiveValue::Set(params.department_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the bare employee row by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::employee::Model>, DbErr> {
        entity::prelude::Employee::find_by_id(id).one(self.db).await
    }

    /// Gets an employee by ID with its projects preloaded.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Employee>, DbErr> {
        let Some(employee) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let projects = employee
            .find_related(entity::prelude::Project)
            .all(self.db)
            .await?;

        Ok(Some(Employee::from_entity(employee, projects)))
    }

    /// Applies `params` over `current`: the scalar columns in one row update, then the
    /// project set when `project_ids` is set.
    ///
    /// Both writes share one transaction, so a failed relink leaves the row unchanged too.
    /// Unset fields keep the values in `current`. When nothing is set no statement is issued
    /// and `current` is returned as is.
    pub async fn update(
        &self,
        current: entity::employee::Model,
        params: &UpdateEmployeeParams,
    ) -> Result<entity::employee::Model, DbErr> {
        if !params.has_scalar_changes() && params.project_ids.is_unset() {
            return Ok(current);
        }

        let txn = self.db.begin().await?;

        let employee = write_scalars(&txn, current, params).await?;
        if let Patch::Set(project_ids) = &params.project_ids {
            relink_projects(&txn, employee.id, project_ids).await?;
        }

        txn.commit().await?;

        Ok(employee)
    }

    /// Replaces the employee's whole project set with `project_ids`.
    ///
    /// Existing links are removed and the new set inserted in one transaction, so the
    /// relation is either fully replaced or left as it was. An empty set clears it.
    pub async fn replace_projects(
        &self,
        employee_id: i32,
        project_ids: &BTreeSet<i32>,
    ) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        relink_projects(&txn, employee_id, project_ids).await?;

        txn.commit().await
    }

    /// Loads the projects of many employees in a single query, keyed by employee ID.
    ///
    /// Employees without projects have no entry.
    pub async fn load_projects(
        &self,
        employee_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::project::Model>>, DbErr> {
        if employee_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::EmployeeProject::find()
            .filter(
                entity::employee_project::Column::EmployeeId.is_in(employee_ids.iter().copied()),
            )
            .find_also_related(entity::prelude::Project)
            .all(self.db)
            .await?;

        let mut projects: HashMap<i32, Vec<entity::project::Model>> = HashMap::new();
        for (link, project) in links {
            if let Some(project) = project {
                projects.entry(link.employee_id).or_default().push(project);
            }
        }

        Ok(projects)
    }

    /// Gets one page of employees ordered by ID, with projects preloaded for the page.
    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<Employee>, DbErr> {
        let query = entity::prelude::Employee::find().order_by_asc(entity::employee::Column::Id);
        let page = paginate(QuerySource::new(self.db, query), request).await?;

        let ids: Vec<i32> = page.items.iter().map(|e| e.id).collect();
        let mut projects = self.load_projects(&ids).await?;

        Ok(page.map(|employee| {
            let related = projects.remove(&employee.id).unwrap_or_default();
            Employee::from_entity(employee, related)
        }))
    }

    /// Deletes an employee; project links cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - The employee existed and was deleted
    /// - `Ok(false)` - No employee with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Employee::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

async fn write_scalars<C: ConnectionTrait>(
    conn: &C,
    current: entity::employee::Model,
    params: &UpdateEmployeeParams,
) -> Result<entity::employee::Model, DbErr> {
    if !params.has_scalar_changes() {
        return Ok(current);
    }

    let first_name = params.first_name.clone().unwrap_or(current.first_name.clone());
    let last_name = params.last_name.clone().unwrap_or(current.last_name.clone());
    let birthdate = params.birthdate.clone().unwrap_or(current.birthdate);
    let department_id = params.department_id.clone().unwrap_or(current.department_id);

    let mut employee: entity::employee::ActiveModel = current.into();
    employee.first_name = ActiveValue::Set(first_name);
    employee.last_name = ActiveValue::Set(last_name);
    employee.birthdate = ActiveValue::Set(birthdate);
    employee.department_id = ActiveValue::Set(department_id);

    employee.update(conn).await
}

async fn relink_projects<C: ConnectionTrait>(
    conn: &C,
    employee_id: i32,
    project_ids: &BTreeSet<i32>,
) -> Result<(), DbErr> {
    entity::prelude::EmployeeProject::delete_many()
        .filter(entity::employee_project::Column::EmployeeId.eq(employee_id))
        .exec(conn)
        .await?;

    if !project_ids.is_empty() {
        entity::prelude::EmployeeProject::insert_many(project_ids.iter().map(|&project_id| {
            entity::employee_project::ActiveModel {
                employee_id: ActiveValue::Set(employee_id),
                project_id: ActiveValue::Set(project_id),
            }
        }))
        .exec_without_returning(conn)
        .await?;
    }

    Ok(())
}
