use async_trait::async_trait;

use crate::domain::catalog::models::MovieId;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::FavoriteChange;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, password and profile
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;

    /// Retrieve every registered user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_users(&self) -> Result<Vec<User>, UserError>;

    /// Update the allow-listed fields of an existing user.
    ///
    /// # Arguments
    /// * `username` - Current username of the user to update
    /// * `command` - Command with optional fields; absent fields are left untouched
    ///
    /// # Errors
    /// * `NotFoundByUsername` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update_user(
        &self,
        username: &Username,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// Deregister an existing user.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, username: &Username) -> Result<(), UserError>;

    /// Add a movie to the user's favorites set. Adding a movie twice is a no-op.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - User does not exist
    /// * `MovieNotFound` - No movie with this title
    /// * `DatabaseError` - Database operation failed
    async fn add_favorite_movie(
        &self,
        username: &Username,
        movie_name: &str,
    ) -> Result<FavoriteChange, UserError>;

    /// Remove a movie from the user's favorites set.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - User does not exist
    /// * `MovieNotFound` - No movie with this title
    /// * `NotAFavorite` - The movie was not in the set
    /// * `DatabaseError` - Database operation failed
    async fn remove_favorite_movie(
        &self,
        username: &Username,
        movie_name: &str,
    ) -> Result<FavoriteChange, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username (exact, case-sensitive match).
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve all users from storage.
    async fn list_all(&self) -> Result<Vec<User>, UserError>;

    /// Update the profile fields of an existing user.
    ///
    /// Favorites are not written by this operation.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `UsernameAlreadyExists` - New username is already taken
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;

    /// Atomically add a movie to the user's favorites set.
    ///
    /// # Returns
    /// The user after the update, or None if the user does not exist
    async fn add_favorite(
        &self,
        id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError>;

    /// Atomically remove a movie from the user's favorites set.
    ///
    /// # Returns
    /// Whether a favorite was removed
    async fn remove_favorite(&self, id: &UserId, movie_id: &MovieId) -> Result<bool, UserError>;
}
