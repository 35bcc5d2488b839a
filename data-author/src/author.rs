use log::debug;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AuthorError, Result};
use crate::id::{AuthorId, IdInput};
use crate::validate;

/// Exact length of a stored activation token, after normalization.
pub const ACTIVATION_TOKEN_LEN: usize = 32;
/// Upper bound on an avatar URL, in bytes.
pub const MAX_AVATAR_URL_LEN: usize = 255;
/// Upper bound on an email address, in bytes.
pub const MAX_EMAIL_LEN: usize = 128;
/// Upper bound on a stored password hash, in bytes.
pub const MAX_PASSWORD_HASH_LEN: usize = 97;
/// Upper bound on a username, in bytes.
pub const MAX_USERNAME_LEN: usize = 32;

/// An author profile with field-level validation.
///
/// Fields are private; reads and writes go through the accessor and
/// mutator pairs, and every mutator re-validates on every assignment.
/// A failed mutation never leaves a partially applied value behind.
///
/// Serialization includes all six fields, the password hash among
/// them, under camelCase names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    id: AuthorId,
    activation_token: Option<String>,
    avatar_url: Option<String>,
    email: String,
    password_hash: String,
    username: String,
}

impl AuthorProfile {
    /// Constructs a profile by applying each mutator in turn.
    ///
    /// The first mutator to reject its value aborts construction and
    /// its error is propagated unchanged.
    pub fn new(
        id: impl Into<IdInput>,
        activation_token: Option<&str>,
        avatar_url: Option<&str>,
        email: Option<&str>,
        password_hash: &str,
        username: Option<&str>,
    ) -> Result<Self> {
        let mut author = AuthorProfile {
            id: AuthorId::from(uuid::Uuid::nil()),
            activation_token: None,
            avatar_url: None,
            email: String::new(),
            password_hash: String::new(),
            username: String::new(),
        };
        author.set_id(id)?;
        author.set_activation_token(activation_token)?;
        author.set_avatar_url(avatar_url)?;
        author.set_email(email)?;
        author.set_password_hash(password_hash)?;
        author.set_username(username)?;
        debug!("constructed author profile {}", author.id);
        Ok(author)
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn activation_token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Replaces the id. Accepts either textual or native UUID form.
    pub fn set_id(&mut self, id: impl Into<IdInput>) -> Result<()> {
        let uuid = validate::parse_uuid(id.into())?;
        self.id = AuthorId::from(uuid);
        Ok(())
    }

    /// Replaces the activation token. An absent token is stored as
    /// absent; a present one is trimmed, lower-cased, and must be
    /// exactly [`ACTIVATION_TOKEN_LEN`] hex digits.
    pub fn set_activation_token(&mut self, token: Option<&str>) -> Result<()> {
        self.activation_token = match token {
            None => None,
            Some(token) => Some(validate::normalize_activation_token(token)?),
        };
        Ok(())
    }

    /// Replaces the avatar URL, stored verbatim. An absent value is
    /// stored as absent.
    pub fn set_avatar_url(&mut self, url: Option<&str>) -> Result<()> {
        match url {
            None => self.avatar_url = None,
            Some(url) => {
                if url.len() > MAX_AVATAR_URL_LEN {
                    return Err(AuthorError::range(
                        "avatar_url",
                        format!("can only be a max of {MAX_AVATAR_URL_LEN} characters"),
                    ));
                }
                self.avatar_url = Some(url.to_owned());
            }
        }
        Ok(())
    }

    /// Replaces the email address. The parameter looks optional but
    /// the field is mandatory: `None` is rejected.
    pub fn set_email(&mut self, email: Option<&str>) -> Result<()> {
        let email = email.ok_or_else(|| AuthorError::range("email", "author needs an email"))?;
        if email.len() > MAX_EMAIL_LEN {
            return Err(AuthorError::range(
                "email",
                format!("can be a max of {MAX_EMAIL_LEN} characters"),
            ));
        }
        self.email = email.to_owned();
        Ok(())
    }

    /// Replaces the password hash with the trimmed input.
    ///
    /// The value must be a non-empty PHC string tagged `argon2i` and
    /// at most [`MAX_PASSWORD_HASH_LEN`] bytes long.
    pub fn set_password_hash(&mut self, hash: &str) -> Result<()> {
        let hash = hash.trim();
        if hash.is_empty() {
            return Err(AuthorError::invalid("password_hash", "empty or insecure"));
        }
        validate::check_password_hash(hash)?;
        if hash.len() > MAX_PASSWORD_HASH_LEN {
            return Err(AuthorError::range(
                "password_hash",
                format!("must be at most {MAX_PASSWORD_HASH_LEN} characters"),
            ));
        }
        self.password_hash = hash.to_owned();
        Ok(())
    }

    /// Replaces the username. The parameter looks optional but the
    /// field is mandatory: `None` is rejected.
    pub fn set_username(&mut self, username: Option<&str>) -> Result<()> {
        let username =
            username.ok_or_else(|| AuthorError::range("username", "author needs a username"))?;
        if username.len() > MAX_USERNAME_LEN {
            return Err(AuthorError::range(
                "username",
                format!("must not be longer than {MAX_USERNAME_LEN} characters"),
            ));
        }
        self.username = username.to_owned();
        Ok(())
    }

    /// Maps every field name to its current value.
    ///
    /// Nothing is excluded, the password hash included; callers who
    /// transmit this are expected to know what they are sending.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "activationToken": self.activation_token,
            "avatarUrl": self.avatar_url,
            "email": self.email,
            "passwordHash": self.password_hash,
            "username": self.username,
        })
    }
}
