use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::catalog::models::Director;
use crate::domain::catalog::models::Genre;
use crate::domain::catalog::models::Movie;
use crate::domain::catalog::ports::CatalogServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<MovieData>>, ApiError> {
    state
        .catalog_service
        .list_movies()
        .await
        .map_err(ApiError::from)
        .map(|movies| ApiSuccess::new(StatusCode::OK, movies.iter().map(MovieData::from).collect()))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<MovieData>, ApiError> {
    state
        .catalog_service
        .get_movie_by_name(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref movie| ApiSuccess::new(StatusCode::OK, movie.into()))
}

pub async fn list_genres(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<GenreData>>, ApiError> {
    state
        .catalog_service
        .list_genres()
        .await
        .map_err(ApiError::from)
        .map(|genres| ApiSuccess::new(StatusCode::OK, genres.iter().map(GenreData::from).collect()))
}

pub async fn get_genre(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<GenreData>, ApiError> {
    state
        .catalog_service
        .get_genre_by_name(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref genre| ApiSuccess::new(StatusCode::OK, genre.into()))
}

pub async fn list_directors(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<DirectorData>>, ApiError> {
    state
        .catalog_service
        .list_directors()
        .await
        .map_err(ApiError::from)
        .map(|directors| {
            ApiSuccess::new(
                StatusCode::OK,
                directors.iter().map(DirectorData::from).collect(),
            )
        })
}

pub async fn get_director(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<DirectorData>, ApiError> {
    state
        .catalog_service
        .get_director_by_name(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref director| ApiSuccess::new(StatusCode::OK, director.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub genre_id: String,
    pub director_id: String,
    pub year_released: Option<NaiveDate>,
    pub image_path: Option<String>,
}

impl From<&Movie> for MovieData {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            name: movie.name.clone(),
            description: movie.description.clone(),
            genre_id: movie.genre.to_string(),
            director_id: movie.director.to_string(),
            year_released: movie.year_released,
            image_path: movie.image_path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub audience: Option<String>,
}

impl From<&Genre> for GenreData {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id.to_string(),
            name: genre.name.clone(),
            description: genre.description.clone(),
            audience: genre.audience.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorData {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub birth_year: Option<NaiveDate>,
    pub death_year: Option<NaiveDate>,
}

impl From<&Director> for DirectorData {
    fn from(director: &Director) -> Self {
        Self {
            id: director.id.to_string(),
            name: director.name.clone(),
            bio: director.bio.clone(),
            birth_year: director.birth_year,
            death_year: director.death_year,
        }
    }
}
