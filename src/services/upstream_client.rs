//! HTTP client for the upstream weather provider.
//!
//! Every call is a single bounded GET: no retries, no fallbacks. Outcomes are
//! logged and, when a metrics registry is supplied, recorded in Prometheus.

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};
use url::Url;

/// Configuration for the upstream HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamClientConfig {
    /// Connection timeout (in seconds)
    pub connect_timeout_seconds: u64,

    /// Upper bound for a whole call, body included (in seconds)
    pub request_timeout_seconds: u64,

    /// Log every upstream call, not only failures
    pub enable_detailed_logging: bool,
}

impl Default for UpstreamClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: 3,
            request_timeout_seconds: 10,
            enable_detailed_logging: true,
        }
    }
}

/// Prometheus instruments for upstream calls
#[derive(Clone)]
pub struct UpstreamMetrics {
    /// Calls by endpoint and outcome
    pub requests_total: CounterVec,

    /// Call duration by endpoint
    pub request_duration_seconds: HistogramVec,

    /// Timeouts by endpoint
    pub timeouts_total: CounterVec,
}

impl UpstreamMetrics {
    /// Create and register the upstream instruments
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let requests_total = CounterVec::new(
            Opts::new(
                "upstream_requests_total",
                "Total upstream weather provider requests by endpoint and outcome",
            ),
            &["endpoint", "outcome"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "upstream_request_duration_seconds",
                "Duration of upstream weather provider requests",
            )
            .buckets(vec![0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
            &["endpoint"],
        )?;

        let timeouts_total = CounterVec::new(
            Opts::new("upstream_timeouts_total", "Total upstream timeouts by endpoint"),
            &["endpoint"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(timeouts_total.clone()))?;

        Ok(Self {
            requests_total,
            request_duration_seconds,
            timeouts_total,
        })
    }
}

/// Status and body of a completed upstream call
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors raised before a complete reply was received
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl UpstreamError {
    /// True when no response could be obtained from the provider
    pub fn is_no_response(&self) -> bool {
        match self {
            UpstreamError::Timeout(_) => true,
            UpstreamError::Network(e) => !e.is_builder(),
            UpstreamError::InvalidRequest(_) => false,
        }
    }
}

/// Upstream HTTP client
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    config: UpstreamClientConfig,
    metrics: Option<UpstreamMetrics>,
}

impl UpstreamClient {
    /// Create a new upstream client
    pub fn new(
        config: UpstreamClientConfig,
        metrics: Option<UpstreamMetrics>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            config,
            metrics,
        })
    }

    /// GET `url` and read the whole body.
    ///
    /// `endpoint` labels logs and metrics; the URL itself is never logged since
    /// it carries the API key.
    pub async fn get(&self, endpoint: &str, url: Url) -> Result<UpstreamReply, UpstreamError> {
        let destination = url.host_str().unwrap_or("unknown").to_string();
        let timeout = Duration::from_secs(self.config.request_timeout_seconds);
        let start = Instant::now();

        let call = async {
            // Error messages must not carry the URL: its query holds the API key
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            Ok::<_, UpstreamError>(UpstreamReply { status, body })
        };

        let result = match tokio::time::timeout(timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(timeout)),
        };
        let duration = start.elapsed();

        match &result {
            Ok(reply) if reply.is_success() => {
                if self.config.enable_detailed_logging {
                    info!(
                        destination = %destination,
                        endpoint = %endpoint,
                        status = reply.status,
                        duration_ms = duration.as_millis(),
                        "Upstream request completed"
                    );
                }
                self.record(endpoint, "success", duration);
            }
            Ok(reply) => {
                warn!(
                    destination = %destination,
                    endpoint = %endpoint,
                    status = reply.status,
                    duration_ms = duration.as_millis(),
                    "Upstream request returned error status"
                );
                self.record(endpoint, "error_status", duration);
            }
            Err(UpstreamError::Timeout(limit)) => {
                warn!(
                    destination = %destination,
                    endpoint = %endpoint,
                    timeout_seconds = limit.as_secs(),
                    "Upstream request timed out"
                );
                self.record(endpoint, "timeout", duration);
                if let Some(metrics) = &self.metrics {
                    metrics.timeouts_total.with_label_values(&[endpoint]).inc();
                }
            }
            Err(e) => {
                error!(
                    destination = %destination,
                    endpoint = %endpoint,
                    error = %e,
                    duration_ms = duration.as_millis(),
                    "Upstream request failed"
                );
                self.record(endpoint, "network_error", duration);
            }
        }

        result
    }

    fn record(&self, endpoint: &str, outcome: &str, duration: Duration) {
        if let Some(metrics) = &self.metrics {
            metrics
                .requests_total
                .with_label_values(&[endpoint, outcome])
                .inc();
            metrics
                .request_duration_seconds
                .with_label_values(&[endpoint])
                .observe(duration.as_secs_f64());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = UpstreamClientConfig::default();
        assert_eq!(config.connect_timeout_seconds, 3);
        assert_eq!(config.request_timeout_seconds, 10);
        assert!(config.enable_detailed_logging);
    }

    #[test]
    fn test_metrics_registration() {
        let registry = Registry::new();
        assert!(UpstreamMetrics::new(&registry).is_ok());
        // Same names cannot be registered twice in one registry
        assert!(UpstreamMetrics::new(&registry).is_err());
    }

    #[test]
    fn test_reply_success_range() {
        let reply = |status| UpstreamReply {
            status,
            body: String::new(),
        };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(301).is_success());
        assert!(!reply(404).is_success());
        assert!(!reply(500).is_success());
    }

    #[test]
    fn test_timeout_counts_as_no_response() {
        assert!(UpstreamError::Timeout(Duration::from_secs(1)).is_no_response());
        assert!(!UpstreamError::InvalidRequest("bad".into()).is_no_response());
    }

    #[tokio::test]
    async fn test_connection_refused_is_no_response() {
        let client = UpstreamClient::new(
            UpstreamClientConfig {
                connect_timeout_seconds: 1,
                request_timeout_seconds: 2,
                enable_detailed_logging: false,
            },
            None,
        )
        .unwrap();

        let url = Url::parse("http://127.0.0.1:1/weather").unwrap();
        let err = client.get("weather", url).await.unwrap_err();
        assert!(err.is_no_response(), "unexpected error: {err}");
    }
}
