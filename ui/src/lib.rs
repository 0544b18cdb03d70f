//! This crate contains the shared UI for the workspace: the auth and notes
//! controllers, the session-store seam, and the components the pages render.

mod auth;
pub use auth::{AuthFlow, AuthForm, AuthMode, NavTarget, SubmitOutcome};

mod busy;
pub use busy::with_busy;

mod client;
pub use client::{make_client, make_session};

mod note_card;
pub use note_card::NoteCard;

mod notes;
pub use notes::{alert, use_notes_load, CreateOutcome, NotesFeed};

pub mod session;
pub use session::{MemorySession, SessionStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
#[cfg(target_arch = "wasm32")]
pub use session::WebSession;
