use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use soilwatch_core::error::NormalizeError;
use soilwatch_feed::feed_client::FeedError;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    InternalServerError(String),
}

impl From<FeedError> for ApiError {
    fn from(error: FeedError) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<NormalizeError> for ApiError {
    fn from(error: NormalizeError) -> Self {
        ApiError::InternalServerError(error.to_string())
    }
}

impl From<askama::Error> for ApiError {
    fn from(error: askama::Error) -> Self {
        ApiError::InternalServerError(format!("Failed to render dashboard: {error}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => {
                error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}
