use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::server::{
    model::employee::Employee,
    schema::output::{OutputSchema, Resolver},
};

#[derive(Debug, Serialize)]
pub struct EmployeeFields {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDate>,
    pub department_id: Option<i32>,
}

/// Ids of the preloaded projects, ascending.
fn project_ids(employee: &Employee) -> Value {
    Value::from(
        employee
            .projects
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>(),
    )
}

impl OutputSchema for Employee {
    type Direct = EmployeeFields;

    const RESOLVERS: &'static [Resolver<Self>] = &[Resolver {
        field: "project_ids",
        resolve: project_ids,
    }];

    fn direct(&self) -> EmployeeFields {
        EmployeeFields {
            id: self.employee.id,
            first_name: self.employee.first_name.clone(),
            last_name: self.employee.last_name.clone(),
            birthdate: self.employee.birthdate,
            department_id: self.employee.department_id,
        }
    }
}
