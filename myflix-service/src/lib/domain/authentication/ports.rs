use async_trait::async_trait;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::LoginOutcome;
use crate::domain::user::models::User;

/// Port for credential checks and bearer token resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check a username/password pair and issue a token.
    ///
    /// # Arguments
    /// * `username` - Username as presented, matched exactly
    /// * `password` - Plaintext password as presented
    ///
    /// # Errors
    /// * `UnknownUser` - No user with this username
    /// * `BadCredential` - Password does not match the stored digest
    /// * `Store` - Credential store failed
    /// * `Issuance` - Token could not be signed
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError>;

    /// Validate a bearer token and resolve it to a live user.
    ///
    /// # Errors
    /// * `MalformedToken` - Token or its subject cannot be parsed
    /// * `InvalidSignature` - Token was not signed with the server secret
    /// * `Expired` - Token lifetime has elapsed
    /// * `UnknownSubject` - The user named by the token no longer exists
    /// * `Store` - Credential store failed
    async fn verify_token(&self, token: &str) -> Result<User, AuthError>;
}
