use std::net::SocketAddr;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::state::AppState;
use crate::{cart, catalog};

pub fn build_app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let assets_dir = state.config.assets_dir.clone();

    // History-API fallback: anything the API and asset routes don't claim
    // gets the SPA entry document.
    let spa = ServeDir::new(&static_dir)
        .not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(catalog::router())
                .merge(cart::router())
                .route("/health", get(|| async { "ok" })),
        )
        .nest_service("/images", ServeDir::new(assets_dir))
        .fallback_service(spa)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
