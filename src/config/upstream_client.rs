//! Configuration for the upstream HTTP client
//!
//! Every outbound call is bounded; expiry is reported to callers as
//! "no response from external weather service".

use crate::services::upstream_client::UpstreamClientConfig;
use std::env;

impl UpstreamClientConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let connect_timeout_seconds = env::var("UPSTREAM_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(defaults.connect_timeout_seconds);

        let request_timeout_seconds = env::var("UPSTREAM_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(defaults.request_timeout_seconds);

        let enable_detailed_logging = env::var("UPSTREAM_DETAILED_LOGGING")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.enable_detailed_logging);

        Self {
            connect_timeout_seconds,
            request_timeout_seconds,
            enable_detailed_logging,
        }
    }
}
