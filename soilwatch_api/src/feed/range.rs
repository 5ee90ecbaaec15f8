use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use jiff::Timestamp;
use serde::Deserialize;
use soilwatch_core::{normalized_reading::NormalizedReading, range_token::resolve_range};
use tracing::debug;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct RangeQuery {
    /// One of `1h`, `24h`, `2d`, `7d`. Anything else means `1h`.
    #[serde(default)]
    pub range: Option<String>,
}

pub struct RangeResponse(Vec<NormalizedReading>);

impl IntoResponse for RangeResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CACHE_CONTROL, "no-store")],
            Json(self.0),
        )
            .into_response()
    }
}

pub async fn range_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RangeQuery>,
) -> Result<RangeResponse, ApiError> {
    let range = resolve_range(query.range.as_deref().unwrap_or_default(), Timestamp::now());

    debug!("Fetching history from {} to {}", range.start(), range.end());

    let points = state
        .feed_client
        .history(&range, &state.calibration)
        .await?;

    Ok(RangeResponse(points))
}
