//! JWT verification backed by `jsonwebtoken`.
//!
//! Verifies signature and expiry before any claim is trusted. This module
//! does NOT perform network operations; key material is provided up front.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::todo::OwnerId;

use super::{AuthError, Claims, Result, TokenVerifier};

/// Token verifier that enforces the issuer signature.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    /// Creates a verifier for HS256 tokens signed with a shared secret.
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            key: DecodingKey::from_secret(secret),
            validation: Self::validation(Algorithm::HS256),
        }
    }

    /// Creates a verifier for RS256 tokens from a PEM-encoded public key.
    pub fn from_rsa_pem(pem: &[u8]) -> Result<Self> {
        let key =
            DecodingKey::from_rsa_pem(pem).map_err(|e| AuthError::InvalidKey(e.to_string()))?;
        Ok(Self {
            key,
            validation: Self::validation(Algorithm::RS256),
        })
    }

    fn validation(algorithm: Algorithm) -> Validation {
        let mut validation = Validation::new(algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, token: &str) -> Result<OwnerId> {
        let token_data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AuthError::InvalidToken("signature verification failed".to_string())
                }
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AuthError::InvalidToken("token expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidToken("unexpected signing algorithm".to_string())
                }
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        if token_data.claims.sub.is_empty() {
            return Err(AuthError::MissingClaim("sub"));
        }

        Ok(OwnerId::new(token_data.claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &[u8] = b"test-secret";

    fn sign(claims: &Claims, secret: &[u8]) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    fn future_exp() -> u64 {
        (chrono::Utc::now().timestamp() as u64) + 3600
    }

    #[test]
    fn verifies_valid_token() {
        let token = sign(
            &Claims {
                sub: "auth0|u1".to_string(),
                exp: future_exp(),
            },
            SECRET,
        );

        let owner = JwtVerifier::from_secret(SECRET).verify(&token).unwrap();
        assert_eq!(owner.as_str(), "auth0|u1");
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = sign(
            &Claims {
                sub: "auth0|u1".to_string(),
                exp: future_exp(),
            },
            b"other-secret",
        );

        let err = JwtVerifier::from_secret(SECRET).verify(&token).unwrap_err();
        assert_eq!(
            err,
            AuthError::InvalidToken("signature verification failed".to_string())
        );
    }

    #[test]
    fn rejects_expired_token() {
        let token = sign(
            &Claims {
                sub: "auth0|u1".to_string(),
                exp: 1, // 1970
            },
            SECRET,
        );

        let err = JwtVerifier::from_secret(SECRET).verify(&token).unwrap_err();
        assert_eq!(err, AuthError::InvalidToken("token expired".to_string()));
    }

    #[test]
    fn rejects_empty_subject() {
        let token = sign(
            &Claims {
                sub: String::new(),
                exp: future_exp(),
            },
            SECRET,
        );

        let err = JwtVerifier::from_secret(SECRET).verify(&token).unwrap_err();
        assert_eq!(err, AuthError::MissingClaim("sub"));
    }

    #[test]
    fn rejects_garbage() {
        let err = JwtVerifier::from_secret(SECRET)
            .verify("not-a-jwt")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}
