//! Incoming hospital search request

use serde::{Deserialize, Serialize};

use crate::error::HospitalError;
use crate::geo::Coordinates;

/// A coordinate as clients send it: either a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    /// Convert to degrees, rejecting text that is not a finite number
    pub fn to_degrees(&self, field: &str) -> Result<f64, HospitalError> {
        let value = match self {
            CoordinateValue::Number(n) => *n,
            CoordinateValue::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                HospitalError::InvalidCoordinate(format!("{field} is not a number: {s:?}"))
            })?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(HospitalError::InvalidCoordinate(format!(
                "{field} must be finite"
            )))
        }
    }
}

/// Request body for a hospital search
#[derive(Debug, Clone, Deserialize)]
pub struct HospitalQuery {
    pub prompt: String,
    pub latitude: Option<CoordinateValue>,
    pub longitude: Option<CoordinateValue>,
}

impl HospitalQuery {
    /// The user's position, or an error naming the missing or invalid field
    pub fn coordinates(&self) -> Result<Coordinates, HospitalError> {
        let latitude = required(self.latitude.as_ref(), "latitude")?;
        let longitude = required(self.longitude.as_ref(), "longitude")?;
        Ok(Coordinates::new(latitude, longitude))
    }
}

fn required(value: Option<&CoordinateValue>, field: &str) -> Result<f64, HospitalError> {
    value
        .ok_or_else(|| HospitalError::InvalidCoordinate(format!("{field} is missing")))?
        .to_degrees(field)
}
