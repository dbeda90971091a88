//! Axum extractor for the authenticated owner.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use taskbox_core::auth::{parse_bearer, AuthError};
use taskbox_core::todo::OwnerId;

use crate::state::AppState;

/// Extractor for the owner identified by the bearer token.
/// Returns 401 if the header is missing, malformed, or fails verification.
pub struct CurrentOwner(pub OwnerId);

impl<S> FromRequestParts<S> for CurrentOwner
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| unauthorized(&AuthError::MissingHeader))?;

        let header_value = header
            .to_str()
            .map_err(|_| unauthorized(&AuthError::MalformedHeader))?;

        let token = parse_bearer(header_value).map_err(|e| unauthorized(&e))?;

        let owner_id = state.verifier.verify(token).map_err(|e| unauthorized(&e))?;

        Ok(CurrentOwner(owner_id))
    }
}

fn unauthorized(err: &AuthError) -> Response {
    tracing::debug!(error = %err, "Rejecting unauthenticated request");
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
        .into_response()
}
