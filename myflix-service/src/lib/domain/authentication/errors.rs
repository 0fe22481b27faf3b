use thiserror::Error;

use crate::user::errors::UserError;

/// Reasons an authentication attempt or bearer token is rejected.
///
/// Every credential variant maps to `401` at the HTTP boundary with a generic
/// message; the distinction only reaches the logs.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Authorization token is missing")]
    MissingToken,

    #[error("Token is malformed: {0}")]
    MalformedToken(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token subject no longer exists: {0}")]
    UnknownSubject(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Password does not match for user: {0}")]
    BadCredential(String),

    // Infrastructure errors
    #[error("Credential store error: {0}")]
    Store(String),

    #[error("Token issuance failed: {0}")]
    Issuance(String),
}

impl AuthError {
    /// Whether the caller should see `401` (as opposed to a server fault).
    pub fn is_rejection(&self) -> bool {
        !matches!(self, AuthError::Store(_) | AuthError::Issuance(_))
    }
}

impl From<auth::JwtError> for AuthError {
    fn from(err: auth::JwtError) -> Self {
        match err {
            auth::JwtError::MalformedToken(msg) => AuthError::MalformedToken(msg),
            auth::JwtError::InvalidSignature => AuthError::InvalidSignature,
            auth::JwtError::Expired => AuthError::Expired,
            auth::JwtError::EncodingFailed(msg) => AuthError::Issuance(msg),
        }
    }
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        AuthError::Store(err.to_string())
    }
}
