//! # Data Author
//!
//! `data-author` is a crate for holding a validated author profile
//! ([`AuthorProfile`]). The profile keeps six fields (id, activation
//! token, avatar URL, email, password hash, username) private and
//! validates each one on every assignment through its mutators.
//!
//! Validation failures come back as [`AuthorError`], with two kinds:
//! structurally wrong values and violated length/presence bounds.

pub mod author;
pub mod error;
pub mod id;
pub mod validate;

pub use author::AuthorProfile;
pub use error::{AuthorError, Result};
pub use id::{AuthorId, IdInput};
