//! Standalone validation helpers shared by the profile mutators.
//!
//! Kept as pure functions so the rules can be exercised (and reused)
//! without an [`AuthorProfile`](crate::AuthorProfile) instance.

use argon2::password_hash::PasswordHash;
use argon2::Algorithm;
use uuid::Uuid;

use crate::author::ACTIVATION_TOKEN_LEN;
use crate::error::{AuthorError, Result};
use crate::id::IdInput;

/// Parses either input form into a UUID.
///
/// Native values pass through untouched; textual values are trimmed
/// and must parse as a canonical UUID string.
pub fn parse_uuid(input: IdInput) -> Result<Uuid> {
    match input {
        IdInput::Native(uuid) => Ok(uuid),
        IdInput::Text(text) => Uuid::parse_str(text.trim()).map_err(|err| {
            AuthorError::invalid_with("id", format!("`{text}` is not a valid UUID"), err)
        }),
    }
}

/// Normalizes an activation token and checks its shape.
///
/// The token is trimmed and lower-cased before validation; the stored
/// form is the normalized one.
pub fn normalize_activation_token(token: &str) -> Result<String> {
    let token = token.trim().to_lowercase();
    if !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AuthorError::range(
            "activation_token",
            "must contain only hexadecimal digits",
        ));
    }
    if token.len() != ACTIVATION_TOKEN_LEN {
        return Err(AuthorError::range(
            "activation_token",
            format!("has to be {ACTIVATION_TOKEN_LEN} characters"),
        ));
    }
    Ok(token)
}

/// Checks that a password hash is a PHC string produced by Argon2i.
///
/// Any other algorithm identifier is rejected, as is anything that
/// does not parse as a PHC string at all.
pub fn check_password_hash(hash: &str) -> Result<()> {
    let parsed = PasswordHash::new(hash)
        .map_err(|err| AuthorError::invalid_with("password_hash", "not a valid hash", err))?;
    if parsed.algorithm != Algorithm::Argon2i.ident() {
        return Err(AuthorError::invalid(
            "password_hash",
            format!("unsupported algorithm `{}`", parsed.algorithm),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARGON2I_HASH: &str = "$argon2i$v=19$m=65536,t=4,p=1$MTIzNDU2Nzg5MDEyMzQ1Ng$YWFhYWFhYWFhYWFhYWFhYWFhYWFhYWFhYWFhYWFhYWE";

    #[test]
    fn token_is_trimmed_and_lowercased() {
        let token = normalize_activation_token("  ABCDEF78901234567890123456789012  ")
            .expect("mixed-case hex token should normalize");
        assert_eq!(token, "abcdef78901234567890123456789012");
    }

    #[test]
    fn argon2i_hash_is_accepted() {
        check_password_hash(ARGON2I_HASH).expect("argon2i PHC string should pass");
    }

    #[test]
    fn unparsable_hash_carries_a_cause() {
        let err = check_password_hash("garbage").unwrap_err();
        match err {
            AuthorError::InvalidFormat { cause, .. } => assert!(cause.is_some()),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }
}
