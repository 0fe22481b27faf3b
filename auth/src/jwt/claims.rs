use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Generic JWT claims structure.
///
/// Supports standard RFC 7519 claims plus custom fields via `extra` map.
/// All standard fields are optional for maximum flexibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Claims {
    /// Subject (user/entity identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims for user authentication with automatic expiration.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username (stored in `extra.username`)
    /// * `lifetime` - Time until the token expires
    ///
    /// # Returns
    /// Claims with sub, exp, iat, and username set
    pub fn for_user(user_id: impl ToString, username: impl Into<String>, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + lifetime;

        Self::new()
            .with_subject(user_id)
            .with_issued_at(now.timestamp())
            .with_expiration(expiration.timestamp())
            .with_extra("username", username.into())
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set expiration (Unix timestamp).
    pub fn with_expiration(mut self, exp: i64) -> Self {
        self.exp = Some(exp);
        self
    }

    /// Set issued at (Unix timestamp).
    pub fn with_issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Get username from extra fields (convenience method).
    pub fn username(&self) -> Option<&str> {
        self.extra.get("username").and_then(|v| v.as_str())
    }
}
