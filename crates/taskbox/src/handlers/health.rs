//! Health check endpoint.

use axum::http::StatusCode;

/// GET /healthz - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections; performs no backend calls.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
