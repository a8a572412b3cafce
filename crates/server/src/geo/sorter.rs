//! Location sorter: geocode hospital names and order them by distance

use std::sync::Arc;

use hospital_core::{Coordinates, HospitalResult, order_by_distance, round_km};

use super::geocoder::GeocodingClient;

/// Orders hospitals by their distance from the user
#[derive(Clone)]
pub struct LocationSorter {
    geocoder: Arc<dyn GeocodingClient>,
    locality_qualifier: String,
}

impl LocationSorter {
    pub fn new(geocoder: Arc<dyn GeocodingClient>, locality_qualifier: impl Into<String>) -> Self {
        Self {
            geocoder,
            locality_qualifier: locality_qualifier.into(),
        }
    }

    /// Geocode every name (one at a time, in input order) and return one
    /// result per name, nearest first, unresolved names last.
    pub async fn sort_by_distance(
        &self,
        user_lat: f64,
        user_lon: f64,
        hospital_names: &[String],
    ) -> Vec<HospitalResult> {
        let user = Coordinates::new(user_lat, user_lon);
        let mut results = Vec::with_capacity(hospital_names.len());

        for name in hospital_names {
            let query = format!("{}{}", name, self.locality_qualifier);

            let result = match self.geocoder.geocode(&query).await {
                Some(coords) => {
                    HospitalResult::located(name.clone(), round_km(user.distance_km(&coords)))
                }
                None => HospitalResult::unresolved(name.clone()),
            };
            tracing::debug!(hospital = %name, distance_km = ?result.distance_km, "Located hospital");
            results.push(result);
        }

        order_by_distance(&mut results);
        results
    }
}
