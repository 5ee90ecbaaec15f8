use std::sync::Arc;

use axum::{Router, routing::get};

use crate::{
    feed::{
        moisture::moisture_handler, range::range_handler, reading::reading_handler,
        temperature::temperature_handler,
    },
    state::AppState,
};

pub fn feed_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/moisture", get(moisture_handler))
        .route("/temperature", get(temperature_handler))
        .route("/reading", get(reading_handler))
        .route("/range", get(range_handler))
}
