use serde::{Deserialize, Serialize};

use crate::model::patch::Patch;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentDto {
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartmentDto {
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub title: Patch<String>,
}
