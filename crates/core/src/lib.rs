//! hospital-core: Shared domain types and pure logic for the hospital finder
//!
//! This crate has no I/O. It provides coordinates and great-circle distance,
//! hospital results and their distance ordering, parsing of model-formatted
//! name lists, and the error types shared with the server.

pub mod error;
pub mod geo;
pub mod hospital;
pub mod list;
pub mod message;
pub mod outcome;
pub mod query;

// Re-export our types
pub use error::HospitalError;
pub use geo::{Coordinates, EARTH_RADIUS_KM, haversine_km, round_km};
pub use hospital::{HospitalResult, order_by_distance};
pub use list::parse_name_list;
pub use message::{AgentMessage, Role};
pub use outcome::{ErrorResponse, EXTRACTION_FAILED};
pub use query::{CoordinateValue, HospitalQuery};
