//! # API crate — REST transport for plainnotes
//!
//! Typed access to the external notes backend. The two traits below are the
//! seams the UI layer programs against: [`AuthApi`] for the credential
//! endpoints and [`NotesApi`] for the notes collection. Implementations live
//! in sibling modules — [`ApiClient`] (reqwest, talks to the real backend)
//! and [`MemoryBackend`] (in-memory, for tests and native development).

pub mod client;
pub mod error;
mod memory;
pub mod models;

pub use client::ApiClient;
pub use error::{ApiError, AuthError};
pub use memory::MemoryBackend;
pub use models::{Credentials, Note, NoteDraft, TokenPair};

/// Async interface to the credential endpoints.
///
/// One call is one POST of the credentials to `route`; the caller decides
/// whether the route means "login" or "register". A success response without
/// token fields is still a success (register responses carry none).
pub trait AuthApi {
    async fn submit(&self, route: &str, credentials: &Credentials) -> Result<TokenPair, ApiError>;
}

/// Async interface to the notes collection.
pub trait NotesApi {
    /// Fetch the full collection.
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError>;
    /// Create a note; the backend assigns the id.
    async fn create_note(&self, draft: &NoteDraft) -> Result<(), ApiError>;
    /// Delete the note with the given id.
    async fn delete_note(&self, id: i64) -> Result<(), ApiError>;
}
