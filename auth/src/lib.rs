//! Authentication utilities library
//!
//! Provides the authentication primitives used by the myFlix service:
//! - Password hashing (Argon2id, configurable cost)
//! - JWT token generation and validation (HS256)
//! - Authentication coordination
//!
//! Nothing here performs I/O. Resolving a token subject to a stored user is left to the caller.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("user123", "alice123", chrono::Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.username(), Some("alice123"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, AuthenticatorSettings, HashingCost};
//!
//! let auth = Authenticator::new(AuthenticatorSettings {
//!     jwt_secret: b"secret_key_at_least_32_bytes_long!".to_vec(),
//!     token_lifetime: chrono::Duration::hours(1),
//!     hashing_cost: HashingCost::default(),
//! })
//! .unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "user123", "alice123").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub.as_deref(), Some("user123"));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::AuthenticatorSettings;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashingCost;
pub use password::PasswordError;
pub use password::PasswordHasher;
