//! reqwest-backed client for the notes backend.
//!
//! One [`ApiClient`] is bound to one backend origin. Every request carries
//! the bearer token, if one was attached. Status handling is strict where
//! the backend is: create expects `201`, delete expects `204`.

use reqwest::{Method, RequestBuilder, StatusCode};

use crate::error::{ApiError, AuthError};
use crate::models::{Credentials, Note, NoteDraft, TokenPair};
use crate::{AuthApi, NotesApi};

const NOTES_PATH: &str = "/api/notes/";

fn delete_path(id: i64) -> String {
    format!("{NOTES_PATH}delete/{id}/")
}

/// HTTP client for one backend origin.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client for the given origin, e.g. `https://notes.example.com`.
    /// A trailing slash is tolerated.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token to every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

impl AuthApi for ApiClient {
    async fn submit(&self, route: &str, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        let response = self
            .request(Method::POST, route)
            .json(credentials)
            .send()
            .await?;

        if response.status().is_success() {
            // A success body without token fields (or without a body at
            // all, as register responses are) decodes to an empty pair.
            Ok(response.json().await.unwrap_or_default())
        } else {
            Err(response
                .json::<AuthError>()
                .await
                .unwrap_or_default()
                .into())
        }
    }
}

impl NotesApi for ApiClient {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let response = self.request(Method::GET, NOTES_PATH).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<(), ApiError> {
        let response = self
            .request(Method::POST, NOTES_PATH)
            .json(draft)
            .send()
            .await?;
        match response.status() {
            StatusCode::CREATED => Ok(()),
            status => Err(ApiError::UnexpectedStatus(status)),
        }
    }

    async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .request(Method::DELETE, &delete_path(id))
            .send()
            .await?;
        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(ApiError::UnexpectedStatus(status)),
        }
    }
}
