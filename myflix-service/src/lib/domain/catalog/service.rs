use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::Director;
use crate::domain::catalog::models::Genre;
use crate::domain::catalog::models::Movie;
use crate::domain::catalog::ports::CatalogRepository;
use crate::domain::catalog::ports::CatalogServicePort;

/// Domain service for catalog lookups.
pub struct CatalogService<CR>
where
    CR: CatalogRepository,
{
    repository: Arc<CR>,
}

impl<CR> CatalogService<CR>
where
    CR: CatalogRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CatalogServicePort for CatalogService<CR>
where
    CR: CatalogRepository,
{
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        self.repository.list_movies().await
    }

    async fn get_movie_by_name(&self, name: &str) -> Result<Movie, CatalogError> {
        self.repository
            .find_movie_by_name(name)
            .await?
            .ok_or_else(|| CatalogError::MovieNotFound(name.to_string()))
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        self.repository.list_genres().await
    }

    async fn get_genre_by_name(&self, name: &str) -> Result<Genre, CatalogError> {
        self.repository
            .find_genre_by_name(name)
            .await?
            .ok_or_else(|| CatalogError::GenreNotFound(name.to_string()))
    }

    async fn list_directors(&self) -> Result<Vec<Director>, CatalogError> {
        self.repository.list_directors().await
    }

    async fn get_director_by_name(&self, name: &str) -> Result<Director, CatalogError> {
        self.repository
            .find_director_by_name(name)
            .await?
            .ok_or_else(|| CatalogError::DirectorNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use uuid::Uuid;

    use super::*;
    use crate::domain::catalog::models::DirectorId;
    use crate::domain::catalog::models::GenreId;
    use crate::domain::catalog::models::MovieId;

    mock! {
        pub TestCatalogRepository {}

        #[async_trait]
        impl CatalogRepository for TestCatalogRepository {
            async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError>;
            async fn find_movie_by_name(&self, name: &str) -> Result<Option<Movie>, CatalogError>;
            async fn list_genres(&self) -> Result<Vec<Genre>, CatalogError>;
            async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, CatalogError>;
            async fn list_directors(&self) -> Result<Vec<Director>, CatalogError>;
            async fn find_director_by_name(&self, name: &str) -> Result<Option<Director>, CatalogError>;
        }
    }

    fn movie(name: &str) -> Movie {
        Movie {
            id: MovieId::new(),
            name: name.to_string(),
            description: "A film".to_string(),
            genre: GenreId(Uuid::new_v4()),
            director: DirectorId(Uuid::new_v4()),
            year_released: None,
            image_path: None,
        }
    }

    #[tokio::test]
    async fn test_get_movie_by_name_success() {
        let mut repository = MockTestCatalogRepository::new();
        let expected = movie("Alien");
        let returned = expected.clone();

        repository
            .expect_find_movie_by_name()
            .withf(|name| name == "Alien")
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = CatalogService::new(Arc::new(repository));

        let result = service.get_movie_by_name("Alien").await.unwrap();
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_get_movie_by_name_not_found() {
        let mut repository = MockTestCatalogRepository::new();
        repository
            .expect_find_movie_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repository));

        let result = service.get_movie_by_name("alien").await;
        assert!(matches!(result, Err(CatalogError::MovieNotFound(name)) if name == "alien"));
    }

    #[tokio::test]
    async fn test_list_movies_passes_through() {
        let mut repository = MockTestCatalogRepository::new();
        repository
            .expect_list_movies()
            .times(1)
            .returning(|| Ok(vec![movie("Alien"), movie("Heat")]));

        let service = CatalogService::new(Arc::new(repository));

        assert_eq!(service.list_movies().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_genre_not_found() {
        let mut repository = MockTestCatalogRepository::new();
        repository
            .expect_find_genre_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let service = CatalogService::new(Arc::new(repository));

        assert!(matches!(
            service.get_genre_by_name("Western").await,
            Err(CatalogError::GenreNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_director_database_error() {
        let mut repository = MockTestCatalogRepository::new();
        repository
            .expect_find_director_by_name()
            .times(1)
            .returning(|_| Err(CatalogError::DatabaseError("connection reset".to_string())));

        let service = CatalogService::new(Arc::new(repository));

        assert!(matches!(
            service.get_director_by_name("Ridley Scott").await,
            Err(CatalogError::DatabaseError(_))
        ));
    }
}
