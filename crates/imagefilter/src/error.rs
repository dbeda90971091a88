use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors surfaced by the filter endpoint.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("image_url is required or malformed")]
    MissingImageUrl,

    #[error("failed to fetch image: {0}")]
    Fetch(String),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Maps a [`FilterError`] to an HTTP status code.
///
/// - `MissingImageUrl` -> 400 (the caller's query is invalid)
/// - `Fetch` -> 502 (the upstream source failed us)
/// - `Decode` -> 422 (the source responded with something that isn't an image)
/// - `Encode` / `Io` -> 500
pub fn filter_error_to_status_code(error: &FilterError) -> StatusCode {
    match error {
        FilterError::MissingImageUrl => StatusCode::BAD_REQUEST,
        FilterError::Fetch(_) => StatusCode::BAD_GATEWAY,
        FilterError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
        FilterError::Encode(_) | FilterError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for FilterError {
    fn into_response(self) -> Response {
        let status = filter_error_to_status_code(&self);
        tracing::warn!(status = %status, error = %self, "Request failed");
        (
            status,
            Json(serde_json::json!({ "message": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_maps_to_400() {
        assert_eq!(
            filter_error_to_status_code(&FilterError::MissingImageUrl),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn fetch_failure_maps_to_502() {
        assert_eq!(
            filter_error_to_status_code(&FilterError::Fetch("timeout".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn decode_failure_maps_to_422() {
        assert_eq!(
            filter_error_to_status_code(&FilterError::Decode("not an image".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
