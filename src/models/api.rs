//! API request and response models.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    /// "healthy", or "degraded" when weather requests cannot succeed
    pub status: String,
    /// Whether an upstream API key is configured
    pub upstream_configured: bool,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Raw query parameters for the weather endpoint.
///
/// Everything is kept as text so reading the query cannot reject a request;
/// presence is checked when converting into a [`crate::models::LocationQuery`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeatherQuery {
    /// City name (e.g., "London")
    pub city: Option<String>,
    /// Latitude coordinate
    pub lat: Option<String>,
    /// Longitude coordinate
    pub lon: Option<String>,
}

impl WeatherQuery {
    /// Read `city`, `lat` and `lon` from a raw query string.
    ///
    /// Never fails: bad percent-escapes decode lossily, unknown keys are
    /// ignored and a repeated key keeps its first value.
    pub fn from_query_string(query: &str) -> Self {
        let mut parsed = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "city" => &mut parsed.city,
                "lat" => &mut parsed.lat,
                "lon" => &mut parsed.lon,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        parsed
    }
}

/// Combined upstream payload returned by the weather endpoint.
///
/// Both bodies are held as raw JSON so they leave the relay exactly as the
/// provider sent them.
#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub current: Box<RawValue>,
    pub forecast: Box<RawValue>,
}

/// JSON error body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
    /// Upstream status, only present when the provider rejected the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    pub fn with_code(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code: Some(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_omits_missing_code() {
        let body = serde_json::to_string(&ErrorResponse::new("boom")).unwrap();
        assert_eq!(body, r#"{"error":"boom"}"#);

        let body = serde_json::to_string(&ErrorResponse::with_code("city not found", 404)).unwrap();
        assert_eq!(body, r#"{"error":"city not found","code":404}"#);
    }

    #[test]
    fn test_weather_bundle_keeps_upstream_bytes() {
        let current = RawValue::from_string(r#"{"z":1,"a":1.50,"name":"Paris"}"#.to_string()).unwrap();
        let forecast = RawValue::from_string(r#"{"list":[ ],"cnt":0}"#.to_string()).unwrap();

        let body = serde_json::to_string(&WeatherBundle { current, forecast }).unwrap();
        assert_eq!(
            body,
            r#"{"current":{"z":1,"a":1.50,"name":"Paris"},"forecast":{"list":[ ],"cnt":0}}"#
        );
    }

    #[test]
    fn test_weather_query_accepts_partial_input() {
        let query = WeatherQuery::from_query_string("lat=51.5");
        assert_eq!(query.lat.as_deref(), Some("51.5"));
        assert!(query.city.is_none());
        assert!(query.lon.is_none());
    }

    #[test]
    fn test_weather_query_decoding() {
        let query = WeatherQuery::from_query_string("city=New+York&units=imperial&lon=%2D0.13");
        assert_eq!(query.city.as_deref(), Some("New York"));
        assert_eq!(query.lon.as_deref(), Some("-0.13"));
        assert!(query.lat.is_none());

        assert_eq!(WeatherQuery::from_query_string(""), WeatherQuery::default());
    }

    #[test]
    fn test_weather_query_repeated_key_keeps_first() {
        let query = WeatherQuery::from_query_string("city=Oslo&city=Bergen&lat=1&lat=2");
        assert_eq!(query.city.as_deref(), Some("Oslo"));
        assert_eq!(query.lat.as_deref(), Some("1"));
    }

    #[test]
    fn test_weather_query_never_rejects_malformed_input() {
        let query = WeatherQuery::from_query_string("city=%E0%A4%A&&=x&lat");
        assert!(query.city.is_some());
        assert_eq!(query.lat.as_deref(), Some(""));
    }
}
