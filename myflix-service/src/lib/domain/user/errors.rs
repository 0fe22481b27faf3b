use thiserror::Error;

use crate::domain::catalog::errors::CatalogError;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must be at least {min} characters long, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username must be at most {max} characters long, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Username must contain only letters and numbers")]
    InvalidCharacters,

    #[error("Username {0} is reserved")]
    Reserved(String),
}

/// Error for Password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },

    #[error("Password must include a number")]
    MissingDigit,

    #[error("Password must include an uppercase letter")]
    MissingUppercase,

    #[error("Password must include a lowercase letter")]
    MissingLowercase,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all user-related operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User not found with username: {0}")]
    NotFoundByUsername(String),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Movie {movie} is not in {username}'s favorites")]
    NotAFavorite { username: String, movie: String },

    #[error("{0} already exists")]
    UsernameAlreadyExists(String),

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<CatalogError> for UserError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MovieNotFound(name) => UserError::MovieNotFound(name),
            CatalogError::DatabaseError(msg) => UserError::DatabaseError(msg),
            other => UserError::Unknown(other.to_string()),
        }
    }
}
