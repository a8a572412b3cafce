use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One hospital and its distance from the user.
///
/// `distance_km` is `None` when the hospital could not be geocoded and
/// serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalResult {
    pub hospital: String,
    pub distance_km: Option<f64>,
}

impl HospitalResult {
    pub fn located(hospital: impl Into<String>, distance_km: f64) -> Self {
        Self {
            hospital: hospital.into(),
            distance_km: Some(distance_km),
        }
    }

    pub fn unresolved(hospital: impl Into<String>) -> Self {
        Self {
            hospital: hospital.into(),
            distance_km: None,
        }
    }
}

/// Sort results nearest first, with unresolved entries after every resolved one.
///
/// The sort is stable, so unresolved entries keep their input order.
pub fn order_by_distance(results: &mut [HospitalResult]) {
    results.sort_by(|a, b| match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
