use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::Director;
use crate::domain::catalog::models::Genre;
use crate::domain::catalog::models::Movie;

/// Port for catalog read operations exposed to the HTTP layer.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// Retrieve every movie in the catalog.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Retrieve a single movie by its exact title.
    ///
    /// # Errors
    /// * `MovieNotFound` - No movie with this title
    /// * `DatabaseError` - Database operation failed
    async fn get_movie_by_name(&self, name: &str) -> Result<Movie, CatalogError>;

    /// Retrieve every genre.
    async fn list_genres(&self) -> Result<Vec<Genre>, CatalogError>;

    /// Retrieve a genre by name.
    ///
    /// # Errors
    /// * `GenreNotFound` - No genre with this name
    async fn get_genre_by_name(&self, name: &str) -> Result<Genre, CatalogError>;

    /// Retrieve every director.
    async fn list_directors(&self) -> Result<Vec<Director>, CatalogError>;

    /// Retrieve a director by name.
    ///
    /// # Errors
    /// * `DirectorNotFound` - No director with this name
    async fn get_director_by_name(&self, name: &str) -> Result<Director, CatalogError>;
}

/// Persistence operations for the movie catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync + 'static {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Retrieve movie by title.
    ///
    /// # Returns
    /// Optional movie (None if not found)
    async fn find_movie_by_name(&self, name: &str) -> Result<Option<Movie>, CatalogError>;

    async fn list_genres(&self) -> Result<Vec<Genre>, CatalogError>;

    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, CatalogError>;

    async fn list_directors(&self) -> Result<Vec<Director>, CatalogError>;

    async fn find_director_by_name(&self, name: &str) -> Result<Option<Director>, CatalogError>;
}
