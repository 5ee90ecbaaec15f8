use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Feed field passed through verbatim as `text/plain`.
pub struct RawFieldResponse(pub String);

impl IntoResponse for RawFieldResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CACHE_CONTROL, "no-store")],
            self.0,
        )
            .into_response()
    }
}
