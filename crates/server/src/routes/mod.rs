pub mod health;
pub mod hello;
pub mod hospitals;
pub mod metrics;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

/// Build the public API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello::get))
        .route("/get-hospitals", post(hospitals::get_hospitals))
}
