use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginOutcome;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::ports::UserRepository;

/// Credential validation and token resolution against the user store.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Spend one full password verification on a login miss, matching the cost of a hit.
    async fn verify_unknown_user(&self, password: &str) -> Result<(), AuthError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();

        tokio::task::spawn_blocking(move || authenticator.reject_unknown_user(&password))
            .await
            .map(|_| ())
            .map_err(|e| AuthError::Issuance(format!("Authentication task failed: {}", e)))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let found = match Username::new(username.to_string()) {
            Ok(name) => self.repository.find_by_username(&name).await?,
            // A name that fails validation cannot belong to a stored user.
            Err(_) => None,
        };

        let Some(user) = found else {
            self.verify_unknown_user(password).await?;
            return Err(AuthError::UnknownUser(username.to_string()));
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();
        let stored_hash = user.password_hash.clone();
        let user_id = user.id;
        let name = user.username.to_string();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, user_id, &name)
        })
        .await
        .map_err(|e| AuthError::Issuance(format!("Authentication task failed: {}", e)))?;

        match result {
            Ok(result) => Ok(LoginOutcome {
                user,
                token: result.access_token,
            }),
            Err(AuthenticationError::InvalidCredentials) => {
                Err(AuthError::BadCredential(username.to_string()))
            }
            Err(AuthenticationError::JwtError(e)) => Err(AuthError::from(e)),
        }
    }

    async fn verify_token(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.authenticator.validate_token(token)?;

        let subject = claims
            .sub
            .as_deref()
            .ok_or_else(|| AuthError::MalformedToken("missing subject".to_string()))?;
        let user_id =
            UserId::from_string(subject).map_err(|e| AuthError::MalformedToken(e.to_string()))?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AuthError::UnknownSubject(user_id.to_string()))
    }
}
