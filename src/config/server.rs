//! Listener configuration.

use std::env;

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Where the HTTP server binds
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let host = env::var("BIND_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { host, port }
    }

    /// `host:port` pair for `HttpServer::bind`
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_MUTEX;

    #[test]
    fn test_server_config_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::remove_var("BIND_HOST");
            env::remove_var("PORT");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 3000));
    }

    #[test]
    fn test_server_config_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("BIND_HOST", "127.0.0.1");
            env::set_var("PORT", "8081");
        }

        let config = ServerConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);

        unsafe {
            env::remove_var("BIND_HOST");
            env::remove_var("PORT");
        }
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        assert_eq!(ServerConfig::from_env().port, DEFAULT_PORT);

        unsafe {
            env::remove_var("PORT");
        }
    }
}
