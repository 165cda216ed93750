//! Location provider implementations.
//!
//! `HttpLocationProvider` asks a network geolocation service for a fresh
//! fix; `FixedLocationProvider` hands back a caller-supplied coordinate
//! (CLI flags, tests). Both are one-shot: no retries, no cached fixes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use gramin_core::location::LocationProvider;
use gramin_types::config::AppConfig;
use gramin_types::location::{Coordinate, LocationError};

/// Geolocation over HTTP, in the Google geolocation API shape:
/// a POST yielding `{"location": {"lat": .., "lng": ..}, "accuracy": ..}`.
///
/// Built without an endpoint, the provider reports `Unsupported` --
/// locating is then only possible with an explicit coordinate.
pub struct HttpLocationProvider {
    client: reqwest::Client,
    endpoint: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeolocateRequest {
    consider_ip: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GeolocateResponse {
    location: GeolocatePoint,
    #[allow(dead_code)]
    accuracy: f64,
}

#[derive(Debug, Default, Deserialize)]
struct GeolocatePoint {
    lat: f64,
    lng: f64,
}

impl HttpLocationProvider {
    /// Build a provider with a bounded wait for the fix.
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self { client, endpoint }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.geolocation_endpoint.clone(),
            Duration::from_secs(config.location_timeout_secs),
        )
    }
}

impl LocationProvider for HttpLocationProvider {
    async fn current_fix(&self) -> Result<Coordinate, LocationError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(LocationError::Unsupported)?;

        let response = self
            .client
            .post(endpoint)
            .json(&GeolocateRequest { consider_ip: true })
            .send()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Unavailable(format!("HTTP {status}")));
        }

        let fix: GeolocateResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        Coordinate::new(fix.location.lat, fix.location.lng)
    }
}

/// A provider that always reports one known coordinate.
pub struct FixedLocationProvider {
    coordinate: Coordinate,
}

impl FixedLocationProvider {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

impl LocationProvider for FixedLocationProvider {
    async fn current_fix(&self) -> Result<Coordinate, LocationError> {
        Ok(self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_endpoint_is_unsupported() {
        let provider = HttpLocationProvider::new(None, Duration::from_secs(1));
        let result = provider.current_fix().await;
        assert!(matches!(result, Err(LocationError::Unsupported)));
    }

    #[tokio::test]
    async fn test_fixed_provider_returns_its_coordinate() {
        let coordinate = Coordinate::new(28.6, 77.2).unwrap();
        let provider = FixedLocationProvider::new(coordinate);
        let fix = provider.current_fix().await.unwrap();
        assert_eq!(fix, coordinate);
    }

    #[test]
    fn test_geolocate_response_deserialization() {
        let json = r#"{"location": {"lat": 28.6, "lng": 77.2}, "accuracy": 1500.0}"#;
        let response: GeolocateResponse = serde_json::from_str(json).unwrap();
        assert!((response.location.lat - 28.6).abs() < f64::EPSILON);
        assert!((response.location.lng - 77.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_geolocate_request_shape() {
        let json = serde_json::to_value(GeolocateRequest { consider_ip: true }).unwrap();
        assert_eq!(json["considerIp"], true);
    }
}
