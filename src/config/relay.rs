//! Upstream provider configuration.

use std::env;

/// Default OpenWeatherMap REST API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Configuration handed to [`crate::services::WeatherRelay`].
///
/// The API key is optional here: the relay reports a configuration error per
/// request instead of refusing to start.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        // An empty key is as good as no key
        let api_key = env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let base_url = env::var("OPENWEATHER_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { api_key, base_url }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_MUTEX;

    #[test]
    fn test_relay_config_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::remove_var("OPENWEATHER_API_KEY");
            env::remove_var("OPENWEATHER_BASE_URL");
        }

        let config = RelayConfig::from_env();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_relay_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("OPENWEATHER_API_KEY", "abc123");
            env::set_var("OPENWEATHER_BASE_URL", "http://localhost:9999/data/2.5");
        }

        let config = RelayConfig::from_env();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.base_url, "http://localhost:9999/data/2.5");

        unsafe {
            env::remove_var("OPENWEATHER_API_KEY");
            env::remove_var("OPENWEATHER_BASE_URL");
        }
    }

    #[test]
    fn test_blank_api_key_is_treated_as_missing() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("OPENWEATHER_API_KEY", "   ");
        }

        let config = RelayConfig::from_env();
        assert!(!config.has_api_key());

        unsafe {
            env::remove_var("OPENWEATHER_API_KEY");
        }
    }

    #[test]
    fn test_builder_helpers() {
        let config = RelayConfig::default()
            .with_api_key("key")
            .with_base_url("http://127.0.0.1:1234");

        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
    }
}
