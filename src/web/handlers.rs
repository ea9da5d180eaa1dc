//! Route handlers. Each one parses the body, calls into [`crate::routing`],
//! and serializes the result.

use axum::{Json, body::Bytes, http::StatusCode};
use serde_json::error::Category;

use super::types::{ErrorResponse, HealthResponse, ModelsResponse, QueryRequest};
use crate::routing::{self, Analysis, CATALOG, Orchestration, Selection};

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Decode a [`QueryRequest`].
///
/// Broken JSON is a 400; well-formed JSON with a missing or mistyped field is
/// a 422.
pub fn parse_query_request(body: &[u8]) -> Result<QueryRequest, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        let status = match e.classify() {
            Category::Data => StatusCode::UNPROCESSABLE_ENTITY,
            Category::Syntax | Category::Eof | Category::Io => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(status = status.as_u16(), "rejected request body: {}", e);
        api_error(status, format!("Invalid request body: {}", e))
    })
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "AI Engine is running ✓",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn models_handler() -> Json<ModelsResponse> {
    Json(ModelsResponse { models: &CATALOG })
}

pub async fn select_model_handler(body: Bytes) -> Result<Json<Selection>, ApiError> {
    let req = parse_query_request(&body)?;
    tracing::debug!(user_id = req.user_id.as_deref().unwrap_or(""), "select-model");
    Ok(Json(routing::select_model(&req.query)))
}

pub async fn analyze_handler(body: Bytes) -> Result<Json<Analysis>, ApiError> {
    let req = parse_query_request(&body)?;
    tracing::debug!(user_id = req.user_id.as_deref().unwrap_or(""), "analyze");
    Ok(Json(routing::analyze(&req.query)))
}

pub async fn orchestrate_handler(body: Bytes) -> Result<Json<Orchestration>, ApiError> {
    let req = parse_query_request(&body)?;
    Ok(Json(routing::orchestrate(&req.query, req.user_id.as_deref())))
}
