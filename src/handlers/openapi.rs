//! OpenAPI document for the relay.

use paperclip::v2::models::{DefaultApiRaw, Info};

/// Document served at `/api/spec/v2`
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Weather Relay".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Relays current weather and forecast data from OpenWeatherMap.\n\n\
                ## Weather\n\
                `GET /api/weather?city=<name>` or `GET /api/weather?lat=<lat>&lon=<lon>` returns\n\
                ```json\n\
                { \"current\": { /* provider current weather */ }, \"forecast\": { /* provider forecast */ } }\n\
                ```\n\
                Both provider bodies are passed through unchanged. Units are metric.\n\
                \n\
                ## Errors\n\
                Errors are JSON objects with an `error` message. When the provider rejects a request\n\
                its status code is passed through and repeated in a `code` field.\n\
                \n\
                ## Tracing\n\
                Every response carries an `X-Request-ID` header; send one to correlate with your own logs."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}
