use actix_web::HttpServer;
use std::io;
use weather_relay::{AppContext, LoggingConfig, ServerConfig, create_app, telemetry};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // A missing .env file is fine; the environment may be set by the deployment
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    telemetry::init_tracing(&LoggingConfig::from_env()).map_err(io::Error::other)?;

    let server_config = ServerConfig::from_env();
    let context = AppContext::from_env().map_err(io::Error::other)?;

    let api_key_loaded = context.relay.config().has_api_key();
    if !api_key_loaded {
        tracing::warn!("OPENWEATHER_API_KEY is not set; weather requests will fail with 500");
    }

    let (host, port) = server_config.bind_address();
    tracing::info!(
        dotenv_loaded,
        api_key_loaded,
        upstream = %context.relay.config().base_url,
        "Weather relay listening at http://{}:{}",
        host,
        port
    );

    HttpServer::new(move || create_app(context.clone()))
        .bind((host.as_str(), port))?
        .run()
        .await
}
