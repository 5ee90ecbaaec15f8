use std::sync::Arc;

use axum::{Json, extract::State};
use soilwatch_core::normalized_reading::NormalizedReading;

use crate::{error::ApiError, state::AppState};

pub async fn reading_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NormalizedReading>, ApiError> {
    let reading = state.feed_client.latest_reading().await?;

    Ok(Json(state.calibration.apply(&reading)?))
}
