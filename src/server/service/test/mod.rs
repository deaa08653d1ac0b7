use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::patch::Patch,
    server::{
        config::PaginationConfig,
        error::{auth::AuthError, AppError},
        model::{
            employee::{CreateEmployeeParams, UpdateEmployeeParams},
            principal::{AuthUser, Capability, Principal},
        },
    },
};


fn superuser() -> Principal {
    Principal::User(AuthUser {
        id: 1,
        username: "testuser".to_string(),
        is_superuser: true,
        capabilities: HashSet::new(),
    })
}

fn user_with(capabilities: &[Capability]) -> Principal {
    Principal::User(AuthUser {
        id: 2,
        username: "staff".to_string(),
        is_superuser: false,
        capabilities: capabilities.iter().copied().collect(),
    })
}

fn pagination() -> PaginationConfig {
    PaginationConfig {
        default_limit: 10,
        max_limit: 20,
    }
}

fn ada(department_id: Option<i32>, project_ids: &[i32]) -> CreateEmployeeParams {
    CreateEmployeeParams {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        birthdate: None,
        department_id,
        project_ids: project_ids.iter().copied().collect(),
    }
}

fn project_ids(employee: &crate::server::model::employee::Employee) -> Vec<i32> {
    employee.projects.iter().map(|p| p.id).collect()
}
