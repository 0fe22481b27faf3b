use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::authentication::errors::AuthError;
use crate::inbound::http::router::AppState;

/// Message for every credential rejection. Never says which check failed.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let Json(body) = body?;
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(ApiError::BadRequest(
            "Missing username or password".to_string(),
        ));
    };

    let outcome = state
        .auth_service
        .login(&username, &password)
        .await
        .map_err(login_error)?;

    tracing::info!(user_id = %outcome.user.id, "Login succeeded");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: outcome.token,
            user: (&outcome.user).into(),
        },
    ))
}

fn login_error(err: AuthError) -> ApiError {
    if err.is_rejection() {
        tracing::warn!(reason = %err, "Login rejected");
        ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
    } else {
        tracing::error!(error = %err, "Login failed");
        ApiError::InternalServerError("Authentication failed".to_string())
    }
}

/// Both fields are optional so a missing one is a `400`, not a deserialization error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub user: UserData,
}
