use serde::Serialize;

use crate::server::schema::output::{OutputSchema, Resolver};

#[derive(Debug, Serialize)]
pub struct ProjectFields {
    pub id: i32,
    pub title: String,
    pub department_id: i32,
}

impl OutputSchema for entity::project::Model {
    type Direct = ProjectFields;

    const RESOLVERS: &'static [Resolver<Self>] = &[];

    fn direct(&self) -> ProjectFields {
        ProjectFields {
            id: self.id,
            title: self.title.clone(),
            department_id: self.department_id,
        }
    }
}
