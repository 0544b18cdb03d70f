use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use reqwest::StatusCode;

use crate::error::{ApiError, AuthError};
use crate::models::{Credentials, Note, NoteDraft, TokenPair};
use crate::{AuthApi, NotesApi};

/// In-memory backend for testing and native development.
///
/// Mimics the real backend's observable behavior: server-assigned ids,
/// `detail` errors on bad logins, a `username` field error on duplicate
/// registration. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    notes: Vec<Note>,
    users: HashMap<String, String>,
    next_id: i64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the notes collection, keeping ids ahead of the seeded ones.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let next_id = notes.iter().map(|note| note.id).max().unwrap_or(0);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                notes,
                users: HashMap::new(),
                next_id,
            })),
        }
    }
}

impl AuthApi for MemoryBackend {
    async fn submit(&self, route: &str, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        if route.contains("register") {
            if inner.users.contains_key(&credentials.username) {
                return Err(AuthError::field(
                    "username",
                    "A user with that username already exists.",
                )
                .into());
            }
            inner
                .users
                .insert(credentials.username.clone(), credentials.password.clone());
            // Register responses carry no tokens.
            Ok(TokenPair::default())
        } else {
            match inner.users.get(&credentials.username) {
                Some(password) if *password == credentials.password => Ok(TokenPair::new(
                    format!("access-{}", credentials.username),
                    format!("refresh-{}", credentials.username),
                )),
                _ => Err(AuthError::detail(
                    "No active account found with the given credentials",
                )
                .into()),
            }
        }
    }
}

impl NotesApi for MemoryBackend {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        Ok(self.inner.lock().unwrap().notes.clone())
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.notes.push(Note {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
        });
        Ok(())
    }

    async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.notes.len();
        inner.notes.retain(|note| note.id != id);
        if inner.notes.len() == before {
            return Err(ApiError::UnexpectedStatus(StatusCode::NOT_FOUND));
        }
        Ok(())
    }
}
