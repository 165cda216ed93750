//! Application configuration types.

use serde::{Deserialize, Serialize};

/// Global configuration, loaded from `config.toml` in the data directory.
///
/// Every field has a default so a missing or partial file still yields a
/// working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generative model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on any single remote request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Bound on the wait for a location fix.
    #[serde(default = "default_location_timeout_secs")]
    pub location_timeout_secs: u64,

    /// Endpoint of a network geolocation service. When unset, locating is
    /// only possible with an explicitly supplied coordinate.
    #[serde(default)]
    pub geolocation_endpoint: Option<String>,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_location_timeout_secs() -> u64 {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
            location_timeout_secs: default_location_timeout_secs(),
            geolocation_endpoint: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.location_timeout_secs, 10);
        assert!(config.geolocation_endpoint.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("model = \"gemini-2.0-flash\"").unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.geolocation_endpoint.is_none());
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
model = "gemini-2.5-flash"
request_timeout_secs = 60
location_timeout_secs = 5
geolocation_endpoint = "https://location.example/v1/geolocate"
"#,
        )
        .unwrap();
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.location_timeout_secs, 5);
        assert_eq!(
            config.geolocation_endpoint.as_deref(),
            Some("https://location.example/v1/geolocate")
        );
    }
}
