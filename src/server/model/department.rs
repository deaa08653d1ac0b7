//! Department domain models and parameters.

use crate::{
    model::{
        department::{CreateDepartmentDto, UpdateDepartmentDto},
        patch::Patch,
    },
    server::{error::validation::ValidationError, schema::input::clean_text},
};

/// Department together with its preloaded projects.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub department: entity::department::Model,
    /// Projects owned by the department, ascending by id.
    pub projects: Vec<entity::project::Model>,
}

impl Department {
    /// Converts entity models to a domain model at the repository boundary.
    pub fn from_entity(
        department: entity::department::Model,
        mut projects: Vec<entity::project::Model>,
    ) -> Self {
        projects.sort_by_key(|p| p.id);

        Self {
            department,
            projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDepartmentParams {
    pub title: String,
}

impl CreateDepartmentParams {
    pub fn from_dto(dto: CreateDepartmentDto) -> Result<Self, ValidationError> {
        Ok(Self {
            title: clean_text("title", dto.title)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDepartmentParams {
    pub id: i32,
    pub title: Patch<String>,
}

impl UpdateDepartmentParams {
    pub fn from_dto(id: i32, dto: UpdateDepartmentDto) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: dto.title.try_map(|v| clean_text("title", v))?,
        })
    }
}
