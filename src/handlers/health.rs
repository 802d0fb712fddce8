//! Health check endpoint handler.

use crate::{models::HealthResponse, services::WeatherRelay};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Always answers 200 while the process is serving; `status` turns to
/// "degraded" when no upstream API key is configured.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the health status of the relay and whether an upstream API key is configured.",
    tags("Health")
)]
pub async fn health(req: HttpRequest) -> Result<web::Json<HealthResponse>, Error> {
    let upstream_configured = req
        .app_data::<web::Data<WeatherRelay>>()
        .map(|relay| relay.config().has_api_key())
        .unwrap_or(false);

    let status = if upstream_configured {
        "healthy"
    } else {
        "degraded"
    };

    Ok(web::Json(HealthResponse {
        status: status.to_string(),
        upstream_configured,
    }))
}
