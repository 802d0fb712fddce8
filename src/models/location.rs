//! Location descriptor resolved from the weather query string.

use crate::models::{RelayError, WeatherQuery};
use std::fmt;

/// Where to fetch weather for.
///
/// Coordinates are carried as the caller sent them; the provider is the one
/// that decides whether they make sense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationQuery {
    City(String),
    Coordinates { lat: String, lon: String },
}

impl LocationQuery {
    /// Query pairs shared by the current-weather and forecast calls
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            LocationQuery::City(city) => vec![("q", city.as_str())],
            LocationQuery::Coordinates { lat, lon } => {
                vec![("lat", lat.as_str()), ("lon", lon.as_str())]
            }
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl TryFrom<&WeatherQuery> for LocationQuery {
    type Error = RelayError;

    /// A non-empty city wins over coordinates; otherwise both `lat` and `lon`
    /// must be non-empty.
    fn try_from(query: &WeatherQuery) -> Result<Self, Self::Error> {
        if let Some(city) = present(&query.city) {
            return Ok(LocationQuery::City(city.to_string()));
        }

        match (present(&query.lat), present(&query.lon)) {
            (Some(lat), Some(lon)) => Ok(LocationQuery::Coordinates {
                lat: lat.to_string(),
                lon: lon.to_string(),
            }),
            _ => Err(RelayError::MissingLocation),
        }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationQuery::City(city) => write!(f, "city: {city}"),
            LocationQuery::Coordinates { lat, lon } => write!(f, "lat: {lat}, lon: {lon}"),
        }
    }
}
