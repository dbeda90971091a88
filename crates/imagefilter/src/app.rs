use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::error::FilterError;
use crate::filter::{fetch_image, filter_to_temp_file};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Outbound HTTP client; carries the fetch timeout.
    pub http: reqwest::Client,
}

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(usage))
        .route("/filteredimage", get(filtered_image))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - static usage string.
async fn usage() -> &'static str {
    "try GET /filteredimage?image_url={{}}"
}

/// Query parameters for the filter endpoint.
#[derive(Debug, Deserialize)]
struct FilteredImageQuery {
    image_url: Option<String>,
}

/// GET /filteredimage?image_url=<url>
///
/// Downloads the image, applies the fixed filter, and returns the filtered
/// file as the response body.
async fn filtered_image(
    State(state): State<AppState>,
    Query(query): Query<FilteredImageQuery>,
) -> Result<impl IntoResponse, FilterError> {
    let raw = query.image_url.ok_or(FilterError::MissingImageUrl)?;
    let url = Url::parse(&raw).map_err(|_| FilterError::MissingImageUrl)?;

    tracing::debug!(image_url = %url, "Filtering image");

    let input = fetch_image(&state.http, &url).await?;

    // Decode/encode is CPU-bound; keep it off the async workers.
    let filtered = tokio::task::spawn_blocking(move || filter_to_temp_file(&input))
        .await
        .map_err(|e| FilterError::Io(std::io::Error::other(e)))??;

    tracing::info!(image_url = %url, bytes = filtered.len(), "Filtered image");

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], filtered))
}
