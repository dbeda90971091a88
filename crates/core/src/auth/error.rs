use thiserror::Error;

/// Authorization failures. Every variant maps to a 401 at the HTTP layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("malformed Authorization header")]
    MalformedHeader,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("missing required claim: {0}")]
    MissingClaim(&'static str),

    #[error("invalid verification key: {0}")]
    InvalidKey(String),
}
