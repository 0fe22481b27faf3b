use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub const MISSING_AUTHORIZATION: &str = "Missing Authorization header";
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: Username,
}

/// Middleware that resolves the bearer token to a live user and adds it to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).map_err(|e| reject(&e))?;

    let user = state
        .auth_service
        .verify_token(token)
        .await
        .map_err(|e| reject(&e))?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(req).await)
}

fn reject(err: &AuthError) -> Response {
    let error = match err {
        AuthError::MissingToken => {
            tracing::warn!(reason = %err, "Bearer authentication rejected");
            ApiError::Unauthorized(MISSING_AUTHORIZATION.to_string())
        }
        _ if err.is_rejection() => {
            tracing::warn!(reason = %err, "Bearer authentication rejected");
            ApiError::Unauthorized(INVALID_TOKEN.to_string())
        }
        _ => {
            tracing::error!(error = %err, "Bearer authentication failed");
            ApiError::InternalServerError("Authentication failed".to_string())
        }
    };

    error.into_response()
}

fn extract_token_from_header(req: &Request) -> Result<&str, AuthError> {
    let auth_str = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}
