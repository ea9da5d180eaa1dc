use serde::{Deserialize, Serialize};

use crate::routing::ModelInfo;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body accepted by every `POST` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    /// Reserved for personalization; only logged today.
    #[serde(default)]
    pub user_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    /// Catalog entries in catalog order.
    pub models: &'static [ModelInfo],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
