//! In-memory provider fakes for unit tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use hospital_core::{AgentMessage, Coordinates, HospitalError};

use crate::ai::LanguageModelClient;
use crate::geo::GeocodingClient;

/// Language model that replays canned replies in order and records each conversation
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<Vec<AgentMessage>>>,
}

impl ScriptedModel {
    pub fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = Result<&'static str, &'static str>>,
    {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<AgentMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModelClient for ScriptedModel {
    async fn complete(&self, messages: &[AgentMessage]) -> Result<String, HospitalError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted reply left".to_string()))
            .map_err(HospitalError::Provider)
    }
}

/// Geocoder backed by a fixed table; unknown places fail
#[derive(Default)]
pub struct TableGeocoder {
    places: HashMap<String, Coordinates>,
    queries: Mutex<Vec<String>>,
}

impl TableGeocoder {
    pub fn with(mut self, place: &str, latitude: f64, longitude: f64) -> Self {
        self.places
            .insert(place.to_string(), Coordinates::new(latitude, longitude));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeocodingClient for TableGeocoder {
    async fn geocode(&self, place: &str) -> Option<Coordinates> {
        self.queries.lock().unwrap().push(place.to_string());
        self.places.get(place).copied()
    }
}
