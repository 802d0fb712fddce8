//! Weather relay: fetch current conditions and forecast, hand both back verbatim.

use crate::{
    config::RelayConfig,
    models::{LocationQuery, RelayError, UPSTREAM_ERROR_MESSAGE, WeatherBundle},
    services::upstream_client::{UpstreamClient, UpstreamError, UpstreamReply},
};
use serde_json::{Value, value::RawValue};
use tracing::{error, info};
use url::Url;

/// Upstream endpoint for current conditions
pub const CURRENT_ENDPOINT: &str = "weather";
/// Upstream endpoint for the 5 day / 3 hour forecast
pub const FORECAST_ENDPOINT: &str = "forecast";
/// Unit system requested from the provider
pub const UNITS: &str = "metric";

/// Relays a location query to the weather provider
#[derive(Clone)]
pub struct WeatherRelay {
    client: UpstreamClient,
    config: RelayConfig,
}

impl WeatherRelay {
    pub fn new(config: RelayConfig, client: UpstreamClient) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Fails with [`RelayError::Configuration`] when no API key is set
    pub fn ensure_configured(&self) -> Result<&str, RelayError> {
        match self.config.api_key.as_deref() {
            Some(key) => Ok(key),
            None => {
                error!("OPENWEATHER_API_KEY is not set; rejecting weather request");
                Err(RelayError::Configuration)
            }
        }
    }

    /// Fetch current weather and forecast for `location`.
    ///
    /// Both calls are issued concurrently and both must succeed; the first
    /// failure decides the error and no partial result is returned.
    pub async fn handle(&self, location: &LocationQuery) -> Result<WeatherBundle, RelayError> {
        let api_key = self.ensure_configured()?;
        info!(location = %location, "Fetching weather");

        let current_url = self
            .build_url(CURRENT_ENDPOINT, location, api_key)
            .map_err(|e| self.map_transport_error(CURRENT_ENDPOINT, location, e))?;
        let forecast_url = self
            .build_url(FORECAST_ENDPOINT, location, api_key)
            .map_err(|e| self.map_transport_error(FORECAST_ENDPOINT, location, e))?;

        let (current, forecast) = tokio::try_join!(
            self.fetch(CURRENT_ENDPOINT, location, current_url),
            self.fetch(FORECAST_ENDPOINT, location, forecast_url),
        )?;

        Ok(WeatherBundle { current, forecast })
    }

    /// `{base}/{endpoint}?<location>&appid=<key>&units=metric`
    pub fn build_url(
        &self,
        endpoint: &str,
        location: &LocationQuery,
        api_key: &str,
    ) -> Result<Url, UpstreamError> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{endpoint}"))
            .map_err(|e| UpstreamError::InvalidRequest(format!("invalid base URL '{base}': {e}")))?;

        if url.cannot_be_a_base() {
            return Err(UpstreamError::InvalidRequest(format!(
                "base URL '{base}' cannot carry a path"
            )));
        }

        url.query_pairs_mut()
            .extend_pairs(location.query_pairs())
            .append_pair("appid", api_key)
            .append_pair("units", UNITS);

        Ok(url)
    }

    async fn fetch(
        &self,
        endpoint: &str,
        location: &LocationQuery,
        url: Url,
    ) -> Result<Box<RawValue>, RelayError> {
        let reply = self
            .client
            .get(endpoint, url)
            .await
            .map_err(|e| self.map_transport_error(endpoint, location, e))?;

        if !reply.is_success() {
            return Err(self.map_status_error(endpoint, location, reply));
        }

        into_raw_json(reply.body)
    }

    fn map_status_error(
        &self,
        endpoint: &str,
        location: &LocationQuery,
        reply: UpstreamReply,
    ) -> RelayError {
        error!(
            endpoint = %endpoint,
            location = %location,
            status = reply.status,
            body = %reply.body,
            "Weather provider returned an error response"
        );

        RelayError::UpstreamStatus {
            status: reply.status,
            message: upstream_message(&reply.body)
                .unwrap_or_else(|| UPSTREAM_ERROR_MESSAGE.to_string()),
        }
    }

    fn map_transport_error(
        &self,
        endpoint: &str,
        location: &LocationQuery,
        err: UpstreamError,
    ) -> RelayError {
        if err.is_no_response() {
            error!(
                endpoint = %endpoint,
                location = %location,
                error = %err,
                "No response received from weather provider"
            );
            RelayError::UpstreamUnreachable
        } else {
            error!(
                endpoint = %endpoint,
                location = %location,
                error = %err,
                "Error setting up weather provider request"
            );
            RelayError::Internal(err.to_string())
        }
    }
}

/// The provider's own explanation, taken from the `message` field of a JSON body.
///
/// Any truthy value counts: non-empty strings as-is, other values rendered as
/// JSON text. `null`, `false`, `0` and `""` fall back to the generic message.
fn upstream_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Keep a successful body byte-for-byte; text that is not JSON is relayed as a
/// JSON string.
fn into_raw_json(body: String) -> Result<Box<RawValue>, RelayError> {
    let json = if serde_json::from_str::<&RawValue>(&body).is_ok() {
        body
    } else {
        serde_json::to_string(&body).map_err(|e| RelayError::Internal(e.to_string()))?
    };

    RawValue::from_string(json).map_err(|e| RelayError::Internal(e.to_string()))
}
