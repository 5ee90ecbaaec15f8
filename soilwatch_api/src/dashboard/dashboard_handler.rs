use std::sync::Arc;

use askama::Template;
use axum::{extract::State, response::Html};

use crate::{
    dashboard::dashboard_template::DashboardTemplate, error::ApiError, state::AppState,
};

pub async fn dashboard_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    let reading = state.feed_client.latest_reading().await?;
    let normalized = state.calibration.apply(&reading)?;

    let page =
        DashboardTemplate::new(&normalized, &state.calibration, &state.dashboard).render()?;

    Ok(Html(page))
}

#[cfg(test)]
mod tests {
    use axum::http::{StatusCode, header};

    use crate::test_utils::{failing_upstream, send, static_upstream, test_app};

    #[tokio::test]
    async fn test_dashboard() {
        let feed_url =
            static_upstream(&[("2025-06-10T08:00:00Z", Some("741.5"), Some("20.5"))]).await;

        let (status, headers, body) = send(test_app(feed_url), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(
            headers[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        assert!(body.contains(">50%<"));
        assert!(body.contains("#FFC107"));
        assert!(body.contains("20.5 °C"));
        assert!(body.contains("thingspeak.com"));
    }

    #[tokio::test]
    async fn test_dashboard_invalid_reading() {
        let feed_url = static_upstream(&[("2025-06-10T08:00:00Z", Some(""), None)]).await;

        let (status, _, body) = send(test_app(feed_url), "/").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.starts_with("Invalid reading"), "{body}");
    }

    #[tokio::test]
    async fn test_dashboard_upstream_unavailable() {
        let feed_url = failing_upstream().await;

        let (status, _, body) = send(test_app(feed_url), "/").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Upstream unavailable: 502 - channel offline");
    }
}
