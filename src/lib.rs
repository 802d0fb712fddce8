//! Weather Relay - a single-endpoint HTTP relay in front of OpenWeatherMap
//!
//! `GET /api/weather` takes a city name or a latitude/longitude pair, fetches
//! current conditions and the forecast from the provider concurrently, and
//! returns both bodies unchanged as `{ "current": ..., "forecast": ... }`.
//!
//! ## Architecture
//!
//! - `config/` - Configuration structures and environment loading
//! - `models/` - Request/response models, location descriptor, error taxonomy
//! - `services/` - The relay, its upstream HTTP client, Prometheus metrics
//! - `handlers/` - HTTP request handlers and the OpenAPI document
//! - `middleware/` - Request IDs, HTTP metrics, CORS
//! - `telemetry` - tracing subscriber setup
//! - `app` - Shared state and the app factory
//!
//! ## Quick Start
//!
//! ```no_run
//! use actix_web::HttpServer;
//! use weather_relay::{AppContext, create_app};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let context = AppContext::from_env().map_err(std::io::Error::other)?;
//!     HttpServer::new(move || create_app(context.clone()))
//!         .bind(("127.0.0.1", 3000))?
//!         .run()
//!         .await
//! }
//! ```

pub mod app;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use app::{AppContext, StartupError, create_app};
pub use config::{LogFormat, LoggingConfig, MetricsConfig, RelayConfig, ServerConfig};
pub use handlers::{create_openapi_spec, get_metrics, health, version, weather};
pub use middleware::{MetricsMiddleware, RequestIdMiddleware, permissive_cors};
pub use models::{
    ErrorResponse, HealthResponse, LocationQuery, RelayError, VersionResponse, WeatherBundle,
    WeatherQuery,
};
pub use services::{
    AppMetrics, UpstreamClient, UpstreamClientConfig, UpstreamError, UpstreamMetrics,
    WeatherRelay,
};
