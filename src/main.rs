#![recursion_limit = "256"]

mod config;
mod proxy;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let port = config.port;

    let app = routes::app(&config).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, upstream = %config.api_upstream_url, "servicedesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
