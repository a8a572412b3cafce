//! hospital-server library crate
//!
//! Exposes `build_app`, `AppState` and the pipeline stages for integration
//! tests. The actual binary entrypoint is in `main.rs`.

pub mod ai;
pub mod config;
mod error;
pub mod geo;
mod middleware;
pub mod pipeline;
mod routes;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use hospital_core::HospitalError;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ai::GroqClient;
use config::Config;
use geo::OpenCageClient;
use pipeline::HospitalPipeline;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// `None` when no language-model key is configured
    pub pipeline: Option<HospitalPipeline>,
}

impl AppState {
    pub fn new(pipeline: Option<HospitalPipeline>) -> Self {
        Self { pipeline }
    }

    /// Wire the Groq and OpenCage clients described by `config`
    pub fn from_config(config: &Config) -> Result<Self, HospitalError> {
        let geocoder = Arc::new(OpenCageClient::new(
            config.opencage_api_key.clone(),
            config.geocoder_base_url.clone(),
        )?);

        let pipeline = config.groq_api_key.as_ref().map(|key| {
            let llm = Arc::new(GroqClient::new(
                key.clone(),
                config.llm_model.clone(),
                config.llm_base_url.clone(),
            ));
            HospitalPipeline::new(llm, geocoder, config.locality_qualifier.clone())
        });

        Ok(Self::new(pipeline))
    }
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(state: AppState, config: &Config) -> Router {
    // Install Prometheus metrics recorder.
    // Use build_recorder() + set_global_recorder() so that repeated calls
    // (e.g. in integration tests) don't panic. The second install is
    // silently ignored and we still get a valid handle for /metrics.
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let prometheus_handle = recorder.handle();
    let _ = metrics::set_global_recorder(recorder);

    let public_routes = Router::new()
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle));

    // Build CORS layer
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(public_routes)
        .nest("/api", routes::api_routes())
        .with_state(state)
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}
