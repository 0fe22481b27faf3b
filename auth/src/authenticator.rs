use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::HashingCost;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

const DECOY_PASSWORD: &str = "decoy-password-never-assigned-to-a-user";

/// Settings an [`Authenticator`] is built from.
///
/// All values are supplied by the deployment; nothing here has a baked-in secret.
#[derive(Debug, Clone)]
pub struct AuthenticatorSettings {
    /// Secret key for HS256 signing
    pub jwt_secret: Vec<u8>,
    /// Lifetime of issued tokens
    pub token_lifetime: Duration,
    /// Argon2 cost parameters for new hashes
    pub hashing_cost: HashingCost,
}

/// Authentication coordinator combining password verification and JWT generation.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and JWT token handling.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_lifetime: Duration,
    /// Digest of a throwaway password, hashed with the configured cost.
    decoy_hash: String,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Errors
    /// * `InvalidParameters` - Hashing cost is rejected by Argon2
    /// * `HashingFailed` - Decoy digest could not be computed
    pub fn new(settings: AuthenticatorSettings) -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::with_cost(settings.hashing_cost)?;
        let decoy_hash = password_hasher.hash(DECOY_PASSWORD)?;

        Ok(Self {
            password_hasher,
            jwt_handler: JwtHandler::new(&settings.jwt_secret),
            token_lifetime: settings.token_lifetime,
            decoy_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Run a full verification for a user that does not exist.
    ///
    /// Costs the same as [`Authenticator::verify_password`] against a stored digest, so a
    /// miss cannot be told apart from a wrong password by timing. Always fails.
    pub fn reject_unknown_user(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, &self.decoy_hash);
        AuthenticationError::InvalidCredentials
    }

    /// Verify credentials and generate a JWT for the given user.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match (or the stored hash is unreadable)
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        username: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(user_id, username)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token for an already authenticated user.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, user_id: impl ToString, username: &str) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, username, self.token_lifetime);
        self.jwt_handler.encode(&claims)
    }

    /// Validate and decode a JWT.
    ///
    /// # Errors
    /// * `MalformedToken`, `InvalidSignature`, `Expired`
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
