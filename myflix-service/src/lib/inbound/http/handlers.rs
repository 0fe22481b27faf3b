use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::user::errors::UserError;

pub mod catalog;
pub mod create_user;
pub mod delete_user;
pub mod favorites;
pub mod get_user;
pub mod login;
pub mod update_user;

pub const WELCOME_MESSAGE: &str = "Welcome to myFlix!";

pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

/// Unreadable request bodies stay inside the response envelope.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_)
            | UserError::NotFoundByUsername(_)
            | UserError::MovieNotFound(_)
            | UserError::NotAFavorite { .. } => ApiError::NotFound(err.to_string()),
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUsername(_)
            | UserError::InvalidPassword(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidUserId(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::Hashing(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                tracing::error!(error = %err, "User operation failed");
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::MovieNotFound(_)
            | CatalogError::GenreNotFound(_)
            | CatalogError::DirectorNotFound(_) => ApiError::NotFound(err.to_string()),
            CatalogError::DatabaseError(_) => {
                tracing::error!(error = %err, "Catalog query failed");
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

/// Parse a `:username` path segment.
///
/// A segment that is not a valid username cannot name a stored user, so it is a `404`.
pub(crate) fn parse_path_username(segment: String) -> Result<Username, ApiError> {
    Username::new(segment.clone())
        .map_err(|_| ApiError::from(UserError::NotFoundByUsername(segment)))
}

/// Only the account holder may mutate their own record.
pub(crate) fn ensure_owner(caller: &AuthenticatedUser, username: &str) -> Result<(), ApiError> {
    if caller.username.as_str() == username {
        return Ok(());
    }

    tracing::warn!(
        caller = %caller.username,
        target = %username,
        "Rejected mutation of another user's account"
    );
    Err(ApiError::Forbidden(
        "You can only modify your own account".to_string(),
    ))
}

/// Parse a `YYYY-MM-DD` birth date.
pub(crate) fn parse_birthday(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest("Invalid date format".to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub favorite_movies: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            birthday: user.birthday,
            favorite_movies: user.favorite_movies.iter().map(|m| m.to_string()).collect(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::models::UserId;

    fn caller(name: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: UserId::new(),
            username: Username::new(name.to_string()).unwrap(),
        }
    }

    #[test]
    fn test_user_error_status_mapping() {
        assert!(matches!(
            ApiError::from(UserError::UsernameAlreadyExists("alice123".to_string())),
            ApiError::Conflict(msg) if msg == "alice123 already exists"
        ));
        assert!(matches!(
            ApiError::from(UserError::MovieNotFound("Alien".to_string())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(UserError::DatabaseError("down".to_string())),
            ApiError::InternalServerError(_)
        ));
    }

    #[test]
    fn test_catalog_error_status_mapping() {
        assert!(matches!(
            ApiError::from(CatalogError::GenreNotFound("Western".to_string())),
            ApiError::NotFound(_)
        ));
    }

    #[test]
    fn test_ensure_owner() {
        assert!(ensure_owner(&caller("alice123"), "alice123").is_ok());
        assert_eq!(
            ensure_owner(&caller("alice123"), "bobby123"),
            Err(ApiError::Forbidden(
                "You can only modify your own account".to_string()
            ))
        );
        // Usernames are case-sensitive.
        assert!(ensure_owner(&caller("alice123"), "Alice123").is_err());
    }

    #[test]
    fn test_parse_birthday() {
        assert_eq!(
            parse_birthday("1990-04-12"),
            Ok(NaiveDate::from_ymd_opt(1990, 4, 12).unwrap())
        );
        assert_eq!(
            parse_birthday("12/04/1990"),
            Err(ApiError::BadRequest("Invalid date format".to_string()))
        );
    }

    #[test]
    fn test_parse_path_username_invalid_is_not_found() {
        assert!(matches!(
            parse_path_username("a!".to_string()),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_user_data_omits_password_hash() {
        let user = User {
            id: UserId::new(),
            username: Username::new("alice123".to_string()).unwrap(),
            email: crate::domain::user::models::EmailAddress::new(
                "alice@example.com".to_string(),
            )
            .unwrap(),
            password_hash: "$argon2id$secret".to_string(),
            first_name: None,
            last_name: None,
            birthday: None,
            favorite_movies: vec![],
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&UserData::from(&user)).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));
    }
}
