/// JSON response envelope
use roster_core::Pagination;
use serde::{Deserialize, Serialize};

/// `{data, meta?}` wrapper for successful reads
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub data: T,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaResponse>,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, meta: None }
    }

    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Self {
            data,
            meta: Some(MetaResponse { pagination }),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaResponse {
    pub pagination: Pagination,
}

/// `{error, developer_details?}` body for every handled failure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_details: Option<String>,
}
