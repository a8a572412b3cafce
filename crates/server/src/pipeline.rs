//! Hospital pipeline: agent → extractor → location sorter

use std::sync::Arc;

use hospital_core::{ErrorResponse, HospitalError, HospitalResult};
use serde::Serialize;

use crate::ai::{InsuranceAgent, LanguageModelClient, ListExtractor};
use crate::geo::{GeocodingClient, LocationSorter};

/// Result of a pipeline run that did not fault
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PipelineOutcome {
    Hospitals(Vec<HospitalResult>),
    Failed(ErrorResponse),
}

/// The three pipeline stages, wired to shared provider clients
#[derive(Clone)]
pub struct HospitalPipeline {
    agent: InsuranceAgent,
    extractor: ListExtractor,
    sorter: LocationSorter,
}

impl HospitalPipeline {
    pub fn new(
        llm: Arc<dyn LanguageModelClient>,
        geocoder: Arc<dyn GeocodingClient>,
        locality_qualifier: impl Into<String>,
    ) -> Self {
        Self {
            agent: InsuranceAgent::new(llm.clone()),
            extractor: ListExtractor::new(llm),
            sorter: LocationSorter::new(geocoder, locality_qualifier),
        }
    }

    /// Ask the model for hospitals matching `prompt` and order them by distance
    /// from (`lat`, `lon`).
    ///
    /// Only a failing first-stage model call is an error. A reply that cannot
    /// be turned into a non-empty list yields [`PipelineOutcome::Failed`]
    /// carrying the raw reply.
    pub async fn get_sorted_hospitals(
        &self,
        prompt: &str,
        lat: f64,
        lon: f64,
    ) -> Result<PipelineOutcome, HospitalError> {
        let raw_output = self.agent.ask(prompt).await?;
        tracing::info!(raw_output = %raw_output, "Primary model output");

        let names = match self.extractor.extract(&raw_output).await {
            Some(names) if !names.is_empty() => names,
            _ => {
                tracing::warn!("Could not extract hospital list");
                return Ok(PipelineOutcome::Failed(ErrorResponse::extraction_failed(
                    raw_output,
                )));
            }
        };
        tracing::info!(hospitals = ?names, "Extracted hospital list");

        let results = self.sorter.sort_by_distance(lat, lon, &names).await;
        Ok(PipelineOutcome::Hospitals(results))
    }
}
