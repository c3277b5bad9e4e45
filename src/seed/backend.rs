//! Contract with the hosted backend the seeder drives.
//!
//! The backend owns its own state machine: flipping a friend request or a
//! join application to `accepted` makes server-side triggers create
//! friendships, participants, chat rooms and notifications. The seeder only
//! posts the transition and later reads whatever now exists.

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    Status { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing field in response: {0}")]
    MissingField(String),
}

impl ApiError {
    /// Row already exists
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Status { code: 409, .. })
    }

    /// Auth admin rejected a create because the email is taken
    pub fn is_already_registered(&self) -> bool {
        match self {
            Self::Status { body, .. } => body.contains("already been registered"),
            _ => false,
        }
    }
}

/// Account as returned by the auth admin API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

pub trait Backend {
    /// Call a REST resource path such as `/rest/v1/profiles?id=eq.X`.
    /// Successful calls return the decoded body; an empty body is `[]`.
    fn rest(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ApiError>;

    /// Create a confirmed account
    fn create_user(&self, email: &str, password: &str) -> Result<AuthUser, ApiError>;

    /// First page of accounts
    fn list_users(&self) -> Result<Vec<AuthUser>, ApiError>;
}
