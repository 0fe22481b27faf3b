use thiserror::Error;

/// Top-level error type for catalog lookups
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Genre not found: {0}")]
    GenreNotFound(String),

    #[error("Director not found: {0}")]
    DirectorNotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
