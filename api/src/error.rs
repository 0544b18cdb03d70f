//! Error types for the REST client.
//!
//! Auth endpoints return a structured body on failure (`detail`, or
//! per-field error lists). [`AuthError`] models that body directly and
//! [`AuthError::message`] reduces it to the single string the form displays,
//! probing fields in a fixed priority order with a generic fallback.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Shown when the backend gives us nothing better to display.
pub const GENERIC_AUTH_MESSAGE: &str = "An error occurred. Please try again.";

/// Fields checked for a displayable message once `detail` is absent, in order.
const FIELD_PRIORITY: &[&str] = &["username", "password"];

/// Structured error body returned by the credential endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthError {
    #[serde(default)]
    pub detail: Option<String>,
    /// Per-field error lists, e.g. `{"username": ["taken"]}`.
    #[serde(flatten)]
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl AuthError {
    /// Error with a top-level `detail` message.
    pub fn detail(message: impl Into<String>) -> Self {
        Self {
            detail: Some(message.into()),
            ..Self::default()
        }
    }

    /// Error with a single message attached to one field.
    pub fn field(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut field_errors = BTreeMap::new();
        field_errors.insert(name.into(), vec![message.into()]);
        Self {
            detail: None,
            field_errors,
        }
    }

    /// The single display string for this error: `detail`, then the first
    /// `username` error, then the first `password` error, then the generic
    /// fallback.
    pub fn message(&self) -> String {
        if let Some(detail) = &self.detail {
            return detail.clone();
        }
        for field in FIELD_PRIORITY {
            if let Some(first) = self.field_errors.get(*field).and_then(|errors| errors.first()) {
                return first.clone();
            }
        }
        GENERIC_AUTH_MESSAGE.to_string()
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for AuthError {}

/// Anything that can go wrong talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (connection refused, DNS, aborted fetch).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a status the operation does not accept.
    #[error("unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
    /// Structured rejection from a credential endpoint.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    /// Display string for the auth form. Structured rejections carry their
    /// own message; everything else collapses to the generic fallback, the
    /// same way a response-less network error did in the original client.
    pub fn auth_message(&self) -> String {
        match self {
            ApiError::Auth(auth) => auth.message(),
            _ => GENERIC_AUTH_MESSAGE.to_string(),
        }
    }
}
