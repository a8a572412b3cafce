//! Greeting endpoint

use axum::Json;
use serde::Serialize;

const GREETING: &str = "Hello from the hospital finder API with improved hospital extraction!";

#[derive(Serialize)]
pub struct HelloResponse {
    message: &'static str,
}

/// GET /api/hello - Static greeting
pub async fn get() -> Json<HelloResponse> {
    Json(HelloResponse { message: GREETING })
}
