use std::sync::Arc;

use axum::extract::State;

use crate::{error::ApiError, feed::raw_field::RawFieldResponse, state::AppState};

pub async fn temperature_handler(
    State(state): State<Arc<AppState>>,
) -> Result<RawFieldResponse, ApiError> {
    let entry = state.feed_client.latest_entry().await?;

    let temperature = entry.temperature().ok_or_else(|| {
        ApiError::InternalServerError(String::from("Latest feed entry has no temperature value"))
    })?;

    Ok(RawFieldResponse(temperature.trim().to_string()))
}
