mod config;
mod dashboard;
mod error;
mod feed;
mod state;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::{Router, serve};
use mimalloc::MiMalloc;
use soilwatch_feed::env::{calibration_from_env, feed_params_from_env};
use soilwatch_feed::feed_client::FeedClient;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::config::ApiConfig;
use crate::dashboard::dashboard_handler::dashboard_handler;
use crate::feed::routes::feed_routes;
use crate::state::AppState;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ApiConfig::from_env()?;
    let calibration = calibration_from_env()?;
    let feed_client = FeedClient::new(feed_params_from_env()?)?;

    info!(
        "Proxying {} with calibration {}..{}",
        feed_client.feed_url(),
        calibration.sensor_min(),
        calibration.sensor_max()
    );

    let state = Arc::new(AppState {
        feed_client,
        calibration,
        dashboard: config.dashboard,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    serve(listener, app(state)).await?;

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(dashboard_handler))
        .merge(feed_routes())
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
