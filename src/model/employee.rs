use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::patch::Patch;

/// Payload of employee create and full replace requests.
///
/// Omitted optional fields take their defaults: no department, no birthdate and an
/// empty project set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeDto {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub department_id: Option<i32>,
    #[serde(default)]
    pub project_ids: Vec<i32>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
}

/// Payload of employee partial update requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployeeDto {
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub first_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub last_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub department_id: Patch<Option<i32>>,
    /// Replaces the whole project set when present; `[]` clears it.
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub project_ids: Patch<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Patch::is_unset")]
    pub birthdate: Patch<Option<NaiveDate>>,
}
