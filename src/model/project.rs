use serde::{Deserialize, Serialize};

use crate::model::patch::Patch;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectDto {
    pub title: String,
    pub department_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProjectDto {
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub department_id: Patch<i32>,
}
