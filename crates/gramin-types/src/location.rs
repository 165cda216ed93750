//! Coordinates, facility records, and location errors.

use serde::{Deserialize, Serialize};

/// A geographic fix as reported by a location provider.
///
/// Construction validates range and finiteness; beyond that the values are
/// opaque. Coordinates are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, LocationError> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if lat_ok && lon_ok {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(LocationError::OutOfRange {
                latitude,
                longitude,
            })
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Errors from the device/location provider side of a locate call.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// No location provider is available at all.
    #[error("location provider not available")]
    Unsupported,

    /// A provider exists but could not produce a fix (denied, timed out,
    /// transport failure).
    #[error("unable to retrieve location: {0}")]
    Unavailable(String),

    #[error("coordinate out of range: ({latitude}, {longitude})")]
    OutOfRange { latitude: f64, longitude: f64 },
}

/// A normalized, display-ready record for one located medical facility.
///
/// Projected from a map-type evidence chunk; ordering follows the remote
/// service's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityEvidence {
    pub title: String,
    pub map_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_snippet: Option<String>,
}

/// The outcome of one grounded facility query.
///
/// Constructed fresh per query and replaced wholesale -- never merged with
/// or diffed against a previous result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub summary_text: String,
    pub facilities: Vec<FacilityEvidence>,
}

impl QueryResult {
    /// True when the retention filter kept no facilities. This is a
    /// distinct "nothing found" display state, not an error.
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}
