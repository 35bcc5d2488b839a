use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthorError>;

/// Validation failures raised by the profile mutators.
///
/// Two kinds cover every rule: a value is either structurally wrong
/// ([`AuthorError::InvalidFormat`]) or it violates a length/presence
/// bound ([`AuthorError::Range`]). The `field` tag names the field
/// that rejected the value.
#[derive(Debug, Error)]
pub enum AuthorError {
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: String,
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{field}: {reason}")]
    Range { field: &'static str, reason: String },
}

impl AuthorError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AuthorError::InvalidFormat {
            field,
            reason: reason.into(),
            cause: None,
        }
    }

    pub(crate) fn invalid_with(
        field: &'static str,
        reason: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AuthorError::InvalidFormat {
            field,
            reason: reason.into(),
            cause: Some(Box::new(cause)),
        }
    }

    pub(crate) fn range(field: &'static str, reason: impl Into<String>) -> Self {
        AuthorError::Range {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field that rejected the value.
    pub fn field(&self) -> &'static str {
        match self {
            AuthorError::InvalidFormat { field, .. } | AuthorError::Range { field, .. } => field,
        }
    }
}
