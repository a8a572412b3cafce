//! OpenCage forward-geocoding client

use std::time::Duration;

use async_trait::async_trait;
use hospital_core::{Coordinates, HospitalError};
use serde::Deserialize;

const GEOCODE_PATH: &str = "/geocode/v1/json";
const COUNTRY_CODE: &str = "in";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A hosted service that maps place names to coordinates
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Best match for `place`, or `None` on any failure
    async fn geocode(&self, place: &str) -> Option<Coordinates>;
}

/// Client for the OpenCage geocoding API, restricted to India
#[derive(Clone)]
pub struct OpenCageClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

impl OpenCageClient {
    pub fn new(api_key: Option<String>, base_url: String) -> Result<Self, HospitalError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HospitalError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn record_failure(reason: &'static str) {
    metrics::counter!("geocode_failures_total", "reason" => reason).increment(1);
}

#[async_trait]
impl GeocodingClient for OpenCageClient {
    async fn geocode(&self, place: &str) -> Option<Coordinates> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!(place = %place, "OPENCAGE_API_KEY not set, skipping geocoding");
            record_failure("unconfigured");
            return None;
        };

        let response = match self
            .http
            .get(format!("{}{}", self.base_url, GEOCODE_PATH))
            .query(&[
                ("q", place),
                ("key", api_key),
                ("limit", "1"),
                ("countrycode", COUNTRY_CODE),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(place = %place, error = %e, "Geocoding request failed");
                record_failure("transport");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(place = %place, status = %response.status(), "OpenCage error");
            record_failure("status");
            return None;
        }

        let body = match response.json::<GeocodeResponse>().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(place = %place, error = %e, "Failed to parse geocoding response");
                record_failure("decode");
                return None;
            }
        };

        match body.results.into_iter().next() {
            Some(result) => Some(Coordinates::new(result.geometry.lat, result.geometry.lng)),
            None => {
                tracing::warn!(place = %place, "No geocoding match");
                record_failure("no_match");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::Query, http::StatusCode, response::IntoResponse, routing::get};
    use serde_json::json;
    use std::collections::HashMap;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Stub that only knows Jupiter Hospital and insists on the expected query
    async fn opencage_stub(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
        let well_formed = params.get("key").map(String::as_str) == Some("test-key")
            && params.get("limit").map(String::as_str) == Some("1")
            && params.get("countrycode").map(String::as_str) == Some("in");
        if !well_formed {
            return (StatusCode::BAD_REQUEST, Json(json!({"results": []})));
        }

        match params.get("q").map(String::as_str) {
            Some("Jupiter Hospital, Thane, India") => (
                StatusCode::OK,
                Json(json!({"results": [{"geometry": {"lat": 19.2094, "lng": 72.9732}}]})),
            ),
            Some("Broken") => (StatusCode::PAYMENT_REQUIRED, Json(json!({"results": []}))),
            _ => (StatusCode::OK, Json(json!({"results": []}))),
        }
    }

    async fn client() -> OpenCageClient {
        let base = spawn_stub(Router::new().route(GEOCODE_PATH, get(opencage_stub))).await;
        OpenCageClient::new(Some("test-key".to_string()), base).unwrap()
    }

    #[tokio::test]
    async fn returns_first_result_geometry() {
        let coords = client()
            .await
            .geocode("Jupiter Hospital, Thane, India")
            .await;
        assert_eq!(coords, Some(Coordinates::new(19.2094, 72.9732)));
    }

    #[tokio::test]
    async fn empty_results_are_absent() {
        assert_eq!(client().await.geocode("Nowhere General").await, None);
    }

    #[tokio::test]
    async fn error_status_is_absent() {
        assert_eq!(client().await.geocode("Broken").await, None);
    }

    #[tokio::test]
    async fn unreachable_provider_is_absent() {
        // Nothing listens on the discard port.
        let client =
            OpenCageClient::new(Some("test-key".into()), "http://127.0.0.1:9".into()).unwrap();
        assert_eq!(client.geocode("Jupiter Hospital").await, None);
    }

    #[tokio::test]
    async fn missing_key_is_absent() {
        let client = OpenCageClient::new(None, "http://127.0.0.1:9".into()).unwrap();
        assert_eq!(client.geocode("Jupiter Hospital").await, None);
    }

    /// Run `place` through a fresh client with a thread-local recorder installed
    /// and return the rendered metrics.
    fn failure_metrics(api_key: Option<&str>, place: &str) -> String {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let coords = metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                let client =
                    OpenCageClient::new(api_key.map(str::to_string), "http://127.0.0.1:9".into())
                        .unwrap();
                client.geocode(place).await
            })
        });
        assert_eq!(coords, None);

        handle.render()
    }

    #[test]
    fn missing_key_counts_a_failure() {
        let rendered = failure_metrics(None, "Jupiter Hospital");
        assert!(rendered.contains("geocode_failures_total"), "{rendered}");
        assert!(rendered.contains(r#"reason="unconfigured""#), "{rendered}");
    }

    #[test]
    fn transport_error_counts_a_failure() {
        let rendered = failure_metrics(Some("test-key"), "Jupiter Hospital");
        assert!(rendered.contains("geocode_failures_total"), "{rendered}");
        assert!(rendered.contains(r#"reason="transport""#), "{rendered}");
    }
}
