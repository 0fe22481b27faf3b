use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::catalog::models::Movie;
use crate::domain::catalog::ports::CatalogRepository;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::FavoriteChange;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR, CR>
where
    UR: UserRepository,
    CR: CatalogRepository,
{
    repository: Arc<UR>,
    catalog: Arc<CR>,
    authenticator: Arc<Authenticator>,
}

impl<UR, CR> UserService<UR, CR>
where
    UR: UserRepository,
    CR: CatalogRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `catalog` - Catalog lookups for favorites
    /// * `authenticator` - Password hashing
    pub fn new(repository: Arc<UR>, catalog: Arc<CR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            catalog,
            authenticator,
        }
    }

    /// Hash on the blocking pool so a slow hash never stalls other requests.
    async fn hash_password(&self, password: Password) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
            .await
            .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
            .map_err(|e| UserError::Hashing(e.to_string()))
    }

    async fn require_user(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))
    }

    async fn require_movie(&self, movie_name: &str) -> Result<Movie, UserError> {
        self.catalog
            .find_movie_by_name(movie_name)
            .await?
            .ok_or_else(|| UserError::MovieNotFound(movie_name.to_string()))
    }
}

#[async_trait]
impl<UR, CR> UserServicePort for UserService<UR, CR>
where
    UR: UserRepository,
    CR: CatalogRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(command.username.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            first_name: command.first_name,
            last_name: command.last_name,
            birthday: command.birthday,
            favorite_movies: Vec::new(),
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.require_user(username).await
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        username: &Username,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self.require_user(username).await?;

        if let Some(new_username) = command.username {
            user.username = new_username;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(first_name) = command.first_name {
            user.first_name = Some(first_name);
        }

        if let Some(last_name) = command.last_name {
            user.last_name = Some(last_name);
        }

        if let Some(birthday) = command.birthday {
            user.birthday = Some(birthday);
        }

        if let Some(new_password) = command.password {
            user.password_hash = self.hash_password(new_password).await?;
        }

        let updated_user = self.repository.update(user).await?;
        tracing::info!(user_id = %updated_user.id, "User updated");

        Ok(updated_user)
    }

    async fn delete_user(&self, username: &Username) -> Result<(), UserError> {
        let user = self.require_user(username).await?;

        self.repository.delete(&user.id).await?;
        tracing::info!(user_id = %user.id, "User deregistered");

        Ok(())
    }

    async fn add_favorite_movie(
        &self,
        username: &Username,
        movie_name: &str,
    ) -> Result<FavoriteChange, UserError> {
        let user = self.require_user(username).await?;
        let movie = self.require_movie(movie_name).await?;

        let user = self
            .repository
            .add_favorite(&user.id, &movie.id)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))?;

        Ok(FavoriteChange {
            movie_name: movie.name,
            user,
        })
    }

    async fn remove_favorite_movie(
        &self,
        username: &Username,
        movie_name: &str,
    ) -> Result<FavoriteChange, UserError> {
        let user = self.require_user(username).await?;
        let movie = self.require_movie(movie_name).await?;

        if !self.repository.remove_favorite(&user.id, &movie.id).await? {
            return Err(UserError::NotAFavorite {
                username: username.to_string(),
                movie: movie.name,
            });
        }

        let user = self
            .repository
            .find_by_id(&user.id)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))?;

        Ok(FavoriteChange {
            movie_name: movie.name,
            user,
        })
    }
}
