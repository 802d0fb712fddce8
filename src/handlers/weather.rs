//! Weather endpoint handler.

use crate::{
    middleware::RequestId,
    models::{LocationQuery, RelayError, WeatherQuery},
    services::WeatherRelay,
};
use actix_web::{Error, HttpRequest, HttpResponse, Result, web};
use paperclip::actix::api_v2_operation;
use tracing::Instrument;

/// Weather endpoint
///
/// Resolves the location, fetches current conditions and forecast from the
/// provider and returns both bodies untouched as `{ "current", "forecast" }`.
#[api_v2_operation(
    summary = "Current Weather and Forecast",
    description = "Relays current conditions and the 5 day / 3 hour forecast from the upstream weather provider. Accepts either a city name (e.g., ?city=London) or latitude/longitude coordinates (e.g., ?lat=51.51&lon=-0.13); city wins when both are given, and a repeated parameter keeps its first value. Returns 400 when no location is given, 500 when the server has no API key or the provider does not answer, and the provider's own status (with `code`) when it rejects the request.",
    tags("Weather")
)]
pub async fn weather(req: HttpRequest) -> Result<HttpResponse, Error> {
    let relay = req
        .app_data::<web::Data<WeatherRelay>>()
        .ok_or_else(|| RelayError::Internal("weather relay is not registered".to_string()))?;

    let request_id = RequestId::from_request(&req)
        .map(|id| id.0)
        .unwrap_or_default();
    let span = tracing::info_span!("weather", request_id = %request_id);

    let bundle = async {
        // A missing key is reported even when the location is also missing
        relay.ensure_configured()?;

        let query = WeatherQuery::from_query_string(req.query_string());
        let location = LocationQuery::try_from(&query)?;
        relay.handle(&location).await
    }
    .instrument(span)
    .await?;

    Ok(HttpResponse::Ok().json(bundle))
}
