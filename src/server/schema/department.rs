use serde::Serialize;
use serde_json::Value;

use crate::server::{
    model::department::Department,
    schema::output::{OutputSchema, Resolver},
};

#[derive(Debug, Serialize)]
pub struct DepartmentFields {
    pub id: i32,
    pub title: String,
}

fn project_ids(department: &Department) -> Value {
    Value::from(
        department
            .projects
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>(),
    )
}

impl OutputSchema for Department {
    type Direct = DepartmentFields;

    const RESOLVERS: &'static [Resolver<Self>] = &[Resolver {
        field: "project_ids",
        resolve: project_ids,
    }];

    fn direct(&self) -> DepartmentFields {
        DepartmentFields {
            id: self.department.id,
            title: self.department.title.clone(),
        }
    }
}
