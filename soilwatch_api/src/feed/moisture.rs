use std::sync::Arc;

use axum::extract::State;

use crate::{error::ApiError, feed::raw_field::RawFieldResponse, state::AppState};

pub async fn moisture_handler(
    State(state): State<Arc<AppState>>,
) -> Result<RawFieldResponse, ApiError> {
    let entry = state.feed_client.latest_entry().await?;

    let moisture = entry.moisture().ok_or_else(|| {
        ApiError::InternalServerError(String::from("Latest feed entry has no moisture value"))
    })?;

    Ok(RawFieldResponse(moisture.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use crate::test_utils::{send, static_upstream, test_app};

    #[tokio::test]
    async fn test_moisture_passthrough() {
        let feed_url =
            static_upstream(&[("2025-06-10T08:00:00Z", Some("741.5"), Some("20.5"))]).await;

        let (status, headers, body) = send(test_app(feed_url), "/moisture").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "741.5");
        assert_eq!(headers[header::CACHE_CONTROL], "no-store");
        assert!(
            headers[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
    }

    #[tokio::test]
    async fn test_moisture_missing_field() {
        let feed_url = static_upstream(&[("2025-06-10T08:00:00Z", None, Some("20.5"))]).await;

        let (status, _, body) = send(test_app(feed_url), "/moisture").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Latest feed entry has no moisture value");
    }

    #[tokio::test]
    async fn test_moisture_empty_feed() {
        let feed_url = static_upstream(&[]).await;

        let (status, _, body) = send(test_app(feed_url), "/moisture").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Feed contains no entries");
    }
}
