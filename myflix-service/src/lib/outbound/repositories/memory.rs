//! In-memory repositories.
//!
//! Used by the integration tests and for running the service without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::Director;
use crate::domain::catalog::models::Genre;
use crate::domain::catalog::models::Movie;
use crate::domain::catalog::models::MovieId;
use crate::domain::catalog::ports::CatalogRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.username == user.username && u.id != user.id)
        {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }

        let stored = users
            .get_mut(&user.id)
            .ok_or_else(|| UserError::NotFound(user.id.to_string()))?;

        // Favorites are owned by add_favorite/remove_favorite.
        let favorite_movies = std::mem::take(&mut stored.favorite_movies);
        *stored = User {
            favorite_movies,
            ..user
        };

        Ok(stored.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    async fn add_favorite(
        &self,
        id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        let mut users = self.users.write().await;

        Ok(users.get_mut(id).map(|user| {
            if !user.has_favorite(movie_id) {
                user.favorite_movies.push(*movie_id);
            }
            user.clone()
        }))
    }

    async fn remove_favorite(&self, id: &UserId, movie_id: &MovieId) -> Result<bool, UserError> {
        let mut users = self.users.write().await;

        let Some(user) = users.get_mut(id) else {
            return Ok(false);
        };

        let before = user.favorite_movies.len();
        user.favorite_movies.retain(|m| m != movie_id);
        Ok(user.favorite_movies.len() < before)
    }
}

/// Read-only catalog fixed at construction.
#[derive(Default)]
pub struct InMemoryCatalogRepository {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    directors: Vec<Director>,
}

impl InMemoryCatalogRepository {
    pub fn new(movies: Vec<Movie>, genres: Vec<Genre>, directors: Vec<Director>) -> Self {
        Self {
            movies,
            genres,
            directors,
        }
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        Ok(self.movies.clone())
    }

    async fn find_movie_by_name(&self, name: &str) -> Result<Option<Movie>, CatalogError> {
        Ok(self.movies.iter().find(|m| m.name == name).cloned())
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, CatalogError> {
        Ok(self.genres.clone())
    }

    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, CatalogError> {
        Ok(self.genres.iter().find(|g| g.name == name).cloned())
    }

    async fn list_directors(&self) -> Result<Vec<Director>, CatalogError> {
        Ok(self.directors.clone())
    }

    async fn find_director_by_name(&self, name: &str) -> Result<Option<Director>, CatalogError> {
        Ok(self.directors.iter().find(|d| d.name == name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    fn user(name: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new(name.to_string()).unwrap(),
            email: EmailAddress::new(format!("{}@example.com", name)).unwrap(),
            password_hash: "$argon2id$stub".to_string(),
            first_name: None,
            last_name: None,
            birthday: None,
            favorite_movies: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let repository = InMemoryUserRepository::new();
        repository.create(user("alice123")).await.unwrap();

        let result = repository.create(user("alice123")).await;
        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_username_lookup_is_case_sensitive() {
        let repository = InMemoryUserRepository::new();
        repository.create(user("alice123")).await.unwrap();

        let upper = Username::new("ALICE123".to_string()).unwrap();
        assert!(repository.find_by_username(&upper).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_favorites_form_a_set() {
        let repository = InMemoryUserRepository::new();
        let created = repository.create(user("alice123")).await.unwrap();
        let movie = MovieId::new();

        repository.add_favorite(&created.id, &movie).await.unwrap();
        let updated = repository
            .add_favorite(&created.id, &movie)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.favorite_movies, vec![movie]);

        assert!(repository.remove_favorite(&created.id, &movie).await.unwrap());
        assert!(!repository.remove_favorite(&created.id, &movie).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_favorite_unknown_user() {
        let repository = InMemoryUserRepository::new();

        let result = repository
            .add_favorite(&UserId::new(), &MovieId::new())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_favorites() {
        let repository = InMemoryUserRepository::new();
        let created = repository.create(user("alice123")).await.unwrap();
        let movie = MovieId::new();
        repository.add_favorite(&created.id, &movie).await.unwrap();

        let mut changed = created.clone();
        changed.first_name = Some("Alice".to_string());
        let updated = repository.update(changed).await.unwrap();

        assert_eq!(updated.first_name.as_deref(), Some("Alice"));
        assert_eq!(updated.favorite_movies, vec![movie]);
    }
}
