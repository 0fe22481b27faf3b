use crate::domain::user::models::User;

/// Successful login: the authenticated user and their bearer token.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    pub token: String,
}
