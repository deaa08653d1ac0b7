//! Project domain parameters.
//!
//! Projects have no relations a response needs preloaded, so the entity model is used
//! directly as the domain model.

use crate::{
    model::{
        patch::Patch,
        project::{CreateProjectDto, UpdateProjectDto},
    },
    server::{error::validation::ValidationError, schema::input::clean_text},
};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectParams {
    pub title: String,
    /// Must reference an existing department.
    pub department_id: i32,
}

impl CreateProjectParams {
    pub fn from_dto(dto: CreateProjectDto) -> Result<Self, ValidationError> {
        Ok(Self {
            title: clean_text("title", dto.title)?,
            department_id: dto.department_id,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProjectParams {
    pub id: i32,
    pub title: Patch<String>,
    pub department_id: Patch<i32>,
}

impl UpdateProjectParams {
    pub fn from_dto(id: i32, dto: UpdateProjectDto) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: dto.title.try_map(|v| clean_text("title", v))?,
            department_id: dto.department_id,
        })
    }
}
