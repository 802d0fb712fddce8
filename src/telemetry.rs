//! Logging setup and per-request log fields.

use crate::config::{LogFormat, LoggingConfig};
use actix_web::HttpRequest;
use tracing_subscriber::EnvFilter;

pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured default filter. Records emitted through
/// the `log` facade (actix, reqwest) are forwarded to the same subscriber.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_current_span(false)
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    }
}

/// Request attributes attached to the request log lines
#[derive(Debug, Clone)]
pub struct RequestFields {
    pub user_agent: Option<String>,
    pub ip_address: String,
    pub method: String,
    pub path: String,
    pub query: String,
}

impl RequestFields {
    pub fn from_request(req: &HttpRequest) -> Self {
        Self {
            user_agent: req
                .headers()
                .get("user-agent")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_string()),
            // Honours Forwarded / X-Forwarded-For when present
            ip_address: req
                .connection_info()
                .realip_remote_addr()
                .unwrap_or("unknown")
                .to_string(),
            method: req.method().to_string(),
            path: req.path().to_string(),
            query: req.query_string().to_string(),
        }
    }
}
