//! Health check endpoint

use axum::{Json, extract::State};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Report whether the hospital pipeline can serve requests
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    if state.pipeline.is_some() {
        Json(HealthResponse {
            status: "healthy".to_string(),
            reason: None,
        })
    } else {
        Json(HealthResponse {
            status: "degraded".to_string(),
            reason: Some("GROQ_API_KEY not set, hospital search disabled".to_string()),
        })
    }
}
