//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::resolver::NearestResult;

/// A client location update.
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,
}

/// Response to a location update: the nearest restroom.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    /// Display name of the restroom
    pub name: String,

    /// Distance from the client, in feet
    pub distance_ft: f64,

    /// Compass bearing from the client, degrees in [0, 360)
    pub bearing: f64,
}

impl From<NearestResult> for NearestResponse {
    fn from(result: NearestResult) -> Self {
        Self {
            name: result.name,
            distance_ft: result.distance_ft,
            bearing: result.bearing,
        }
    }
}

/// A single map marker.
#[derive(Debug, Serialize)]
pub struct MarkerResult {
    /// Display name of the restroom
    pub name: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Response for the map marker export: the full catalog, in catalog order.
#[derive(Debug, Serialize)]
pub struct MarkersResponse {
    /// All catalog entries
    pub markers: Vec<MarkerResult>,
}

impl MarkersResponse {
    /// Project the catalog to marker triples.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let markers = catalog
            .iter()
            .map(|record| MarkerResult {
                name: record.name().to_string(),
                latitude: record.location().latitude(),
                longitude: record.location().longitude(),
            })
            .collect();

        Self { markers }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
