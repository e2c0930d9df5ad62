use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{
    auth::{require_auth, Authenticator},
    config::Config,
    handlers, AppState,
};

/// Build the application router: a public health probe plus the
/// bearer-guarded API, with CORS and request tracing layered on top.
pub fn app(state: AppState) -> Router {
    let public = Router::new().route("/health", get(handlers::health_check));

    let protected = Router::new()
        .route("/api/hello", get(handlers::hello))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public)
        .merge(protected)
        .with_state(state)
        .layer(build_cors())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(cfg: Config) -> Result<()> {
    let authenticator = Authenticator::new(cfg.master_api_key);
    if !authenticator.is_configured() {
        warn!("MASTER_API_KEY is not set; /api/hello will answer 500 until it is");
    }

    let state = AppState { authenticator };
    let app = app(state);

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "backend listening");

    axum::serve(listener, app).await.context("server error")
}

// Demo policy: every origin, method and header is allowed and credentials
// may be sent. tower-http refuses the literal wildcard together with
// credentials, so the request values are mirrored instead. Not suitable
// for production without restricting origins.
fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
