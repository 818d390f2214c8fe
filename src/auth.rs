//! Bearer-token gate for the query endpoint.
//!
//! This is a single shared-secret check, not a credential system: the
//! expected token comes from configuration and is compared verbatim.

use crate::error::AuthError;

/// Validates a raw `Authorization` header value against the expected secret.
///
/// The header must have the form `<scheme> <token>` with a case-insensitive
/// `bearer` scheme. Returns the validated token on success.
pub fn verify_bearer<'a>(
    header: Option<&'a str>,
    expected_token: &str,
) -> Result<&'a str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;

    let mut parts = header.split_whitespace();
    let (scheme, token) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) => (scheme, token),
        _ => return Err(AuthError::MalformedHeader),
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidScheme);
    }
    if token != expected_token {
        return Err(AuthError::InvalidToken);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "7e3d7d4298f67b2d8e7a6c9e7e4a3f9d09f5e8d4de6e7d5f";

    #[test]
    fn accepts_the_configured_token() {
        let header = format!("Bearer {SECRET}");
        assert_eq!(verify_bearer(Some(&header), SECRET), Ok(SECRET));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let header = format!("bEaReR {SECRET}");
        assert_eq!(verify_bearer(Some(&header), SECRET), Ok(SECRET));
    }

    #[test]
    fn missing_header_is_rejected() {
        assert_eq!(verify_bearer(None, SECRET), Err(AuthError::MissingHeader));
    }

    #[test]
    fn wrong_scheme_is_rejected() {
        let header = format!("Basic {SECRET}");
        assert_eq!(
            verify_bearer(Some(&header), SECRET),
            Err(AuthError::InvalidScheme)
        );
    }

    #[test]
    fn wrong_token_is_rejected() {
        assert_eq!(
            verify_bearer(Some("Bearer nope"), SECRET),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn header_must_split_into_exactly_two_tokens() {
        for header in ["", "Bearer", "Bearer one two", "   "] {
            assert_eq!(
                verify_bearer(Some(header), SECRET),
                Err(AuthError::MalformedHeader),
                "header {header:?} should be malformed",
            );
        }
    }
}
