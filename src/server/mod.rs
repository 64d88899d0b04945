pub mod handlers;
mod types;

pub use types::PingResponse;

use crate::{
    Error, Result,
    config::{Config, CorsConfig, ServerConfig, provider_settings},
    llm::{HttpCompletionClient, Provider},
    relay::Relay,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    // Credentials are read once here and stay fixed for the life of the process
    let claude = provider_settings(&config, Provider::Claude).await;
    let chatgpt = provider_settings(&config, Provider::ChatGpt).await;
    info!("Claude model: {}, ChatGPT model: {}", claude.model, chatgpt.model);

    let client = HttpCompletionClient::new(claude, chatgpt);
    let app_state = handlers::AppState {
        relay: Relay::new(Arc::new(client)),
    };

    let app = router(app_state, &config.server.cors);

    let addr = bind_addr(&config.server)?;

    info!("Starting mind map relay on http://{}", addr);
    info!("Send POST requests to http://{addr}/api/claude or http://{addr}/api/chatgpt");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn bind_addr(server: &ServerConfig) -> Result<SocketAddr> {
    let ip = server.host.parse::<IpAddr>().map_err(|e| {
        Error::config(format!("invalid server.host '{}': {}", server.host, e))
    })?;
    Ok(SocketAddr::new(ip, server.port))
}

pub fn router(state: handlers::AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/api/ping", get(handlers::ping))
        .route("/api/claude", post(handlers::claude))
        .route("/api/chatgpt", post(handlers::chatgpt))
        // Mind maps have no size cap
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors)),
        )
        .with_state(state)
}

/// Any origin is accepted. With credentials on, the origin is echoed back since
/// browsers refuse a literal `*` on credentialed responses.
pub fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allow_credentials {
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
