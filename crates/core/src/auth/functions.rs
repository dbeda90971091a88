use super::AuthError;

/// Extract the raw token from an `Authorization` header value.
///
/// The header must carry the `Bearer` scheme followed by a non-empty token.
/// Anything else is a [`AuthError::MalformedHeader`].
pub fn parse_bearer(header: &str) -> Result<&str, AuthError> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MalformedHeader)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bearer_token() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_bearer("Bearer  token  "), Ok("token"));
    }

    #[test]
    fn rejects_missing_scheme() {
        assert_eq!(
            parse_bearer("abc.def.ghi"),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn rejects_wrong_scheme() {
        assert_eq!(
            parse_bearer("Basic dXNlcjpwYXNz"),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn rejects_empty_token() {
        assert_eq!(parse_bearer("Bearer "), Err(AuthError::MalformedHeader));
        assert_eq!(parse_bearer("Bearer"), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert_eq!(
            parse_bearer("bearer abc.def.ghi"),
            Err(AuthError::MalformedHeader)
        );
    }
}
