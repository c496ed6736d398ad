/*!
   Module `inbound` exposes the map domain over HTTP: a JSON API under `/api` and the browser
   page at `/`.
*/

mod api;
mod handlers;
mod page;

use crate::domain::ports::MapService;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

#[derive(Debug, Clone)]
/// The global application state shared between all request handlers.
struct AppState<MS: MapService> {
    map_service: Arc<MS>,
}

/// The application's HTTP server. The underlying HTTP package is opaque to module consumers.
pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new(
        map_service: impl MapService,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
            |request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            },
        );

        let state = AppState {
            map_service: Arc::new(map_service),
        };

        let router = router(state).layer(trace_layer);

        let listener = net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    /// Runs the HTTP server.
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("listening on {}", self.listener.local_addr()?);
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

fn router<MS: MapService>(state: AppState<MS>) -> Router {
    Router::new()
        .route("/", get(handlers::map_page_handler::<MS>))
        .nest("/api", api_routes())
        .with_state(state)
}

fn api_routes<MS: MapService>() -> Router<AppState<MS>> {
    Router::new().route("/maps", post(handlers::create_map_handler::<MS>))
}
