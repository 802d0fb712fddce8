//! Application state and app factory shared by the binary and the tests.

use crate::{
    config::{MetricsConfig, RelayConfig},
    handlers::{create_openapi_spec, get_metrics, health, version, weather},
    middleware::{MetricsMiddleware, RequestIdMiddleware, permissive_cors},
    services::{AppMetrics, UpstreamClient, UpstreamClientConfig, WeatherRelay},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};

/// Failures while assembling the application at startup
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to create metrics registry: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared state handed to every worker.
///
/// Built once; each worker gets clones of the same `Data` handles.
#[derive(Clone)]
pub struct AppContext {
    pub relay: web::Data<WeatherRelay>,
    pub metrics: web::Data<AppMetrics>,
    pub metrics_config: web::Data<MetricsConfig>,
}

impl AppContext {
    pub fn new(
        relay_config: RelayConfig,
        client_config: UpstreamClientConfig,
        metrics_config: MetricsConfig,
    ) -> Result<Self, StartupError> {
        let metrics = AppMetrics::new()?;
        let client = UpstreamClient::new(client_config, Some(metrics.upstream.clone()))?;
        let relay = WeatherRelay::new(relay_config, client);

        Ok(Self {
            relay: web::Data::new(relay),
            metrics: web::Data::new(metrics),
            metrics_config: web::Data::new(metrics_config),
        })
    }

    /// Build the context from environment variables
    pub fn from_env() -> Result<Self, StartupError> {
        Self::new(
            RelayConfig::from_env(),
            UpstreamClientConfig::from_env(),
            MetricsConfig::from_env(),
        )
    }
}

/// Creates the relay application
///
/// Routes:
/// - `GET /api/weather`
/// - `GET /api/health`
/// - `GET /api/version`
/// - `GET /api/metrics`
/// - `GET /api/spec/v2`
pub fn create_app(
    context: AppContext,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(permissive_cors())
        .wrap(MetricsMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(context.relay)
        .app_data(context.metrics)
        .app_data(context.metrics_config)
        .service(web::resource("/api/weather").route(web::get().to(weather)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
