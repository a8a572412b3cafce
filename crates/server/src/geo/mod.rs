//! Geocoding and distance ordering

pub mod geocoder;
pub mod sorter;

pub use geocoder::{GeocodingClient, OpenCageClient};
pub use sorter::LocationSorter;
