use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::catalog::models::MovieId;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Users joined with their favorites, aggregated into one row per user.
const SELECT_USERS: &str = r#"
    SELECT u.id, u.username, u.email, u.password_hash, u.first_name, u.last_name,
           u.birthday, u.created_at,
           COALESCE(
               ARRAY_AGG(f.movie_id ORDER BY f.added_at) FILTER (WHERE f.movie_id IS NOT NULL),
               '{}'
           ) AS favorite_movies
    FROM users u
    LEFT JOIN user_favorite_movies f ON f.user_id = u.id
"#;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, UserError> {
        let favorite_movies: Vec<Uuid> = row.try_get("favorite_movies").map_err(db_error)?;

        Ok(User {
            id: UserId(row.try_get("id").map_err(db_error)?),
            username: Username::new(row.try_get("username").map_err(db_error)?)?,
            email: EmailAddress::new(row.try_get("email").map_err(db_error)?)?,
            password_hash: row.try_get("password_hash").map_err(db_error)?,
            first_name: row.try_get("first_name").map_err(db_error)?,
            last_name: row.try_get("last_name").map_err(db_error)?,
            birthday: row.try_get("birthday").map_err(db_error)?,
            favorite_movies: favorite_movies.into_iter().map(MovieId).collect(),
            created_at: row.try_get("created_at").map_err(db_error)?,
        })
    }

    fn map_write_error(e: sqlx::Error, user: &User) -> UserError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() && db_err.constraint() == Some("users_username_key") {
                return UserError::UsernameAlreadyExists(user.username.to_string());
            }
        }
        db_error(e)
    }
}

fn db_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users
                (id, username, email, password_hash, first_name, last_name, birthday, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.birthday)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &user))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let query = format!("{} WHERE u.id = $1 GROUP BY u.id", SELECT_USERS);

        sqlx::query(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .map(|row| Self::row_to_user(&row))
            .transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let query = format!("{} WHERE u.username = $1 GROUP BY u.id", SELECT_USERS);

        sqlx::query(&query)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?
            .map(|row| Self::row_to_user(&row))
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let query = format!("{} GROUP BY u.id ORDER BY u.created_at DESC", SELECT_USERS);

        sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?
            .iter()
            .map(Self::row_to_user)
            .collect()
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = $2, email = $3, password_hash = $4,
                first_name = $5, last_name = $6, birthday = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.birthday)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &user))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.id.to_string()));
        }

        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn add_favorite(
        &self,
        id: &UserId,
        movie_id: &MovieId,
    ) -> Result<Option<User>, UserError> {
        sqlx::query(
            r#"
            INSERT INTO user_favorite_movies (user_id, movie_id)
            SELECT $1, $2
            WHERE EXISTS (SELECT 1 FROM users WHERE id = $1)
            ON CONFLICT (user_id, movie_id) DO NOTHING
            "#,
        )
        .bind(id.0)
        .bind(movie_id.0)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        self.find_by_id(id).await
    }

    async fn remove_favorite(&self, id: &UserId, movie_id: &MovieId) -> Result<bool, UserError> {
        let result =
            sqlx::query("DELETE FROM user_favorite_movies WHERE user_id = $1 AND movie_id = $2")
                .bind(id.0)
                .bind(movie_id.0)
                .execute(&self.pool)
                .await
                .map_err(db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
