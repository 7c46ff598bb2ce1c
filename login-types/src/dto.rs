//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Username;
use crate::error::AppError;

// ─────────────────────────────────────────────────────────────────────────────
// Login DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Credential pair submitted to `POST /login`.
///
/// Both fields are optional on the wire. An absent or `null` field is the
/// empty string, which only matches a record provisioned with an empty value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login name, compared case-sensitively
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: Option<String>,
    /// Plaintext password, verified against the stored digest
    #[serde(default)]
    #[schema(example = "secret")]
    pub password: Option<String>,
}

/// Reads a request body. Only a JSON object is a credential pair; serde would
/// otherwise also accept a positional array.
impl TryFrom<serde_json::Value> for LoginRequest {
    type Error = AppError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(AppError::MalformedRequest(
                "Request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| AppError::MalformedRequest(e.to_string()))
    }
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Splits the request into a username and password, substituting the
    /// empty string for absent fields.
    pub fn into_credentials(self) -> (Username, String) {
        (
            Username::new(self.username.unwrap_or_default()),
            self.password.unwrap_or_default(),
        )
    }
}

/// Result of a credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// True when the pair matches a stored record
    pub success: bool,
}

/// Body returned for malformed requests and store failures.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Human readable reason
    #[schema(example = "Credential store unavailable")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 503)]
    pub code: u16,
}
