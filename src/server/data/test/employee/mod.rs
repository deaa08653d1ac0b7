use crate::{
    model::patch::Patch,
    server::{
        data::employee::EmployeeRepository,
        model::employee::{CreateEmployeeParams, UpdateEmployeeParams},
        util::pagination::PageRequest,
    },
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::collections::BTreeSet;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_paginated;
mod replace_projects;

fn params(first_name: &str, last_name: &str) -> CreateEmployeeParams {
    CreateEmployeeParams {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birthdate: None,
        department_id: None,
        project_ids: BTreeSet::new(),
    }
}
