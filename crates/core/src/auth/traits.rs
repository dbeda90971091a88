use crate::todo::OwnerId;

use super::AuthError;

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Capability abstraction over bearer-token verification.
///
/// The production implementation ([`super::JwtVerifier`]) enforces the
/// issuer signature; tests inject a static verifier through the same seam.
pub trait TokenVerifier: Send + Sync {
    /// Verifies a raw token and returns the owner it identifies.
    fn verify(&self, token: &str) -> Result<OwnerId>;
}
