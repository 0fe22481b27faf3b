use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ensure_owner;
use super::parse_path_username;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::FavoriteChange;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn add_favorite_movie(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path((username, movie_name)): Path<(String, String)>,
) -> Result<ApiSuccess<FavoriteResponseData>, ApiError> {
    ensure_owner(&caller, &username)?;
    let username = parse_path_username(username)?;

    state
        .user_service
        .add_favorite_movie(&username, &movie_name)
        .await
        .map_err(ApiError::from)
        .map(|change| {
            let message = format!("{} was added to favorites", change.movie_name);
            ApiSuccess::new(StatusCode::OK, FavoriteResponseData::new(message, &change))
        })
}

pub async fn remove_favorite_movie(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path((username, movie_name)): Path<(String, String)>,
) -> Result<ApiSuccess<FavoriteResponseData>, ApiError> {
    ensure_owner(&caller, &username)?;
    let username = parse_path_username(username)?;

    state
        .user_service
        .remove_favorite_movie(&username, &movie_name)
        .await
        .map_err(ApiError::from)
        .map(|change| {
            let message = format!("{} was removed from favorites", change.movie_name);
            ApiSuccess::new(StatusCode::OK, FavoriteResponseData::new(message, &change))
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteResponseData {
    pub message: String,
    pub user: UserData,
}

impl FavoriteResponseData {
    fn new(message: String, change: &FavoriteChange) -> Self {
        Self {
            message,
            user: (&change.user).into(),
        }
    }
}
