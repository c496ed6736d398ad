mod config;
mod domain;
mod inbound;
mod outbound;

use treasure_core::{JsonFileSource, load_or_fallback};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::from_env()?;

    // A minimal tracing middleware for request logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Descriptions are read once; every request reuses the same list.
    let descriptions = load_or_fallback(&JsonFileSource::new(&config.descriptions_path));

    let metrics = outbound::metrics::CountingMetrics::default();
    let map_service = domain::service::Service::new(descriptions, metrics);

    let server_config = inbound::HttpServerConfig {
        port: &config.server_port,
    };
    let http_server = inbound::HttpServer::new(map_service, server_config).await?;

    http_server.run().await
}
