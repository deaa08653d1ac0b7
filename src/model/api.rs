use serde::{Deserialize, Serialize};

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
    /// Path of the offending input field for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Identity of an entity that was created before the write failed part-way.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field: None,
            id: None,
        }
    }
}

/// Offset/limit query parameters of list endpoints.
///
/// Signed so that negative values can be clamped instead of rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// Envelope returned by list endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub count: u64,
}
