//! Hospital search endpoint

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use hospital_core::HospitalQuery;

use crate::AppState;
use crate::error::AppError;
use crate::pipeline::PipelineOutcome;

/// POST /api/get-hospitals - Hospitals relevant to the prompt, nearest first
///
/// Responds with a JSON array of `{hospital, distance_km}` on success, or with
/// `{error, raw_output}` (still 200) when the model's answer could not be
/// turned into a hospital list.
pub async fn get_hospitals(
    State(state): State<AppState>,
    payload: Result<Json<HospitalQuery>, JsonRejection>,
) -> Result<Json<PipelineOutcome>, AppError> {
    let Json(query) = payload?;
    let user = query.coordinates()?;

    let pipeline = state
        .pipeline
        .as_ref()
        .ok_or_else(|| AppError::Internal("GROQ_API_KEY not configured".to_string()))?;

    tracing::info!(
        prompt = %query.prompt,
        latitude = user.latitude,
        longitude = user.longitude,
        "Hospital search"
    );

    let outcome = pipeline
        .get_sorted_hospitals(&query.prompt, user.latitude, user.longitude)
        .await?;

    Ok(Json(outcome))
}
