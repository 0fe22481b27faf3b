use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::Director;
use crate::domain::catalog::models::DirectorId;
use crate::domain::catalog::models::Genre;
use crate::domain::catalog::models::GenreId;
use crate::domain::catalog::models::Movie;
use crate::domain::catalog::models::MovieId;
use crate::domain::catalog::ports::CatalogRepository;

const SELECT_MOVIES: &str = r#"
    SELECT id, name, description, genre_id, director_id, year_released, image_path
    FROM movies
"#;

const SELECT_GENRES: &str = "SELECT id, name, description, audience FROM genres";

const SELECT_DIRECTORS: &str = "SELECT id, name, bio, birth_year, death_year FROM directors";

pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_movie(row: &PgRow) -> Result<Movie, CatalogError> {
        Ok(Movie {
            id: MovieId(row.try_get("id").map_err(db_error)?),
            name: row.try_get("name").map_err(db_error)?,
            description: row.try_get("description").map_err(db_error)?,
            genre: GenreId(row.try_get("genre_id").map_err(db_error)?),
            director: DirectorId(row.try_get("director_id").map_err(db_error)?),
            year_released: row.try_get("year_released").map_err(db_error)?,
            image_path: row.try_get("image_path").map_err(db_error)?,
        })
    }

    fn row_to_genre(row: &PgRow) -> Result<Genre, CatalogError> {
        Ok(Genre {
            id: GenreId(row.try_get("id").map_err(db_error)?),
            name: row.try_get("name").map_err(db_error)?,
            description: row.try_get("description").map_err(db_error)?,
            audience: row.try_get("audience").map_err(db_error)?,
        })
    }

    fn row_to_director(row: &PgRow) -> Result<Director, CatalogError> {
        Ok(Director {
            id: DirectorId(row.try_get("id").map_err(db_error)?),
            name: row.try_get("name").map_err(db_error)?,
            bio: row.try_get("bio").map_err(db_error)?,
            birth_year: row.try_get("birth_year").map_err(db_error)?,
            death_year: row.try_get("death_year").map_err(db_error)?,
        })
    }
}

fn db_error(e: sqlx::Error) -> CatalogError {
    CatalogError::DatabaseError(e.to_string())
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        let query = format!("{} ORDER BY name", SELECT_MOVIES);

        sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?
            .iter()
            .map(Self::row_to_movie)
            .collect()
    }

    async fn find_movie_by_name(&self, name: &str) -> Result<Option<Movie>, CatalogError> {
        let query = format!("{} WHERE name = $1", SELECT_MOVIES);

        sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .map(|row| Self::row_to_movie(&row))
            .transpose()
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        let query = format!("{} ORDER BY name", SELECT_GENRES);

        sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?
            .iter()
            .map(Self::row_to_genre)
            .collect()
    }

    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, CatalogError> {
        let query = format!("{} WHERE name = $1", SELECT_GENRES);

        sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .map(|row| Self::row_to_genre(&row))
            .transpose()
    }

    async fn list_directors(&self) -> Result<Vec<Director>, CatalogError> {
        let query = format!("{} ORDER BY name", SELECT_DIRECTORS);

        sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?
            .iter()
            .map(Self::row_to_director)
            .collect()
    }

    async fn find_director_by_name(&self, name: &str) -> Result<Option<Director>, CatalogError> {
        let query = format!("{} WHERE name = $1", SELECT_DIRECTORS);

        sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .map(|row| Self::row_to_director(&row))
            .transpose()
    }
}
