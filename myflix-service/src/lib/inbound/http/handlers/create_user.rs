use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::parse_birthday;
use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UsernameError;

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(body) = body?;
    state
        .user_service
        .create_user(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for creating a user (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUserRequest {
    username: Option<String>,
    password: Option<String>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    birthday: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateUserRequestError {
    #[error("Missing required field: {0}")]
    Missing(&'static str),

    #[error("Invalid username: {0}")]
    Username(#[from] UsernameError),

    #[error("Invalid password: {0}")]
    Password(#[from] PasswordPolicyError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid date format")]
    Birthday,
}

impl CreateUserRequest {
    fn try_into_command(self) -> Result<CreateUserCommand, ParseCreateUserRequestError> {
        let username = self
            .username
            .ok_or(ParseCreateUserRequestError::Missing("username"))?;
        let password = self
            .password
            .ok_or(ParseCreateUserRequestError::Missing("password"))?;
        let email = self
            .email
            .ok_or(ParseCreateUserRequestError::Missing("email"))?;

        let birthday = self
            .birthday
            .map(|value| parse_birthday(&value))
            .transpose()
            .map_err(|_| ParseCreateUserRequestError::Birthday)?;

        Ok(CreateUserCommand {
            username: Username::new(username)?,
            email: EmailAddress::new(email)?,
            password: Password::new(password)?,
            first_name: self.first_name,
            last_name: self.last_name,
            birthday,
        })
    }
}

impl From<ParseCreateUserRequestError> for ApiError {
    fn from(err: ParseCreateUserRequestError) -> Self {
        match err {
            ParseCreateUserRequestError::Missing(_) | ParseCreateUserRequestError::Birthday => {
                ApiError::BadRequest(err.to_string())
            }
            _ => ApiError::UnprocessableEntity(err.to_string()),
        }
    }
}
