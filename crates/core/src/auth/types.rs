use serde::{Deserialize, Serialize};

/// Claims extracted from a verified bearer token.
///
/// Only the claims this service consumes are modeled; anything else in the
/// payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the owner identifier.
    pub sub: String,
    /// Expiration time as a Unix timestamp.
    pub exp: u64,
}
