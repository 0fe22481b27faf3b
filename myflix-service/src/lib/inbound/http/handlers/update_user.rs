use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ensure_owner;
use super::parse_birthday;
use super::parse_path_username;
use super::UserData;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::ports::UserServicePort;

/// HTTP request body for updating a user (raw JSON)
///
/// Unknown keys are ignored; only these fields can be written.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birthday: Option<String>,
}

impl UpdateUserRequest {
    fn try_into_command(self) -> Result<UpdateUserCommand, ApiError> {
        let birthday = self
            .birthday
            .as_deref()
            .map(parse_birthday)
            .transpose()?;

        Ok(UpdateUserCommand {
            username: self
                .username
                .map(Username::new)
                .transpose()
                .map_err(UserError::from)?,
            email: self
                .email
                .map(EmailAddress::new)
                .transpose()
                .map_err(UserError::from)?,
            password: self
                .password
                .map(Password::new)
                .transpose()
                .map_err(UserError::from)?,
            first_name: self.first_name,
            last_name: self.last_name,
            birthday,
        })
    }
}

pub async fn update_user(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(username): Path<String>,
    req: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let Json(req) = req?;
    ensure_owner(&caller, &username)?;
    let username = parse_path_username(username)?;
    let command = req.try_into_command()?;

    state
        .user_service
        .update_user(&username, command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
