use core::{fmt, str::FromStr};

use serde::Serialize;
use uuid::Uuid;

use crate::error::AuthorError;
use crate::validate;

/// Strongly typed author id backed by a UUID.
///
/// Parsing from text goes through [`validate::parse_uuid`], so an
/// `AuthorId` in hand is always a well-formed identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AuthorId(Uuid);

impl AuthorId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        AuthorId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AuthorId {
    fn from(uuid: Uuid) -> Self {
        AuthorId(uuid)
    }
}

impl FromStr for AuthorId {
    type Err = AuthorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate::parse_uuid(IdInput::from(s)).map(AuthorId)
    }
}

impl AsRef<Uuid> for AuthorId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accepted input forms for an author id.
///
/// Callers hold ids either as text or as a native [`Uuid`]; mutators
/// take `impl Into<IdInput>` so both forms go through the same
/// validation path.
#[derive(Debug, Clone)]
pub enum IdInput {
    Text(String),
    Native(Uuid),
}

impl From<&str> for IdInput {
    fn from(value: &str) -> Self {
        IdInput::Text(value.to_owned())
    }
}

impl From<String> for IdInput {
    fn from(value: String) -> Self {
        IdInput::Text(value)
    }
}

impl From<Uuid> for IdInput {
    fn from(value: Uuid) -> Self {
        IdInput::Native(value)
    }
}

impl From<AuthorId> for IdInput {
    fn from(value: AuthorId) -> Self {
        IdInput::Native(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_uuid_text() {
        let id: AuthorId = "cad80653-b18c-42db-869f-b93bf2ffffef"
            .parse()
            .expect("valid UUID should parse");
        assert_eq!(id.to_string(), "cad80653-b18c-42db-869f-b93bf2ffffef");
    }

    #[test]
    fn rejects_malformed_text() {
        let err = "not-a-uuid".parse::<AuthorId>().unwrap_err();
        assert!(matches!(err, AuthorError::InvalidFormat { field: "id", .. }));
    }

    #[test]
    fn native_uuid_converts_losslessly() {
        let uuid = Uuid::new_v4();
        let id = AuthorId::from(uuid);
        assert_eq!(id.to_uuid(), uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }
}
