//! Platform-appropriate constructors for the transport and session seams.
//!
//! In the browser the client talks to the page's own origin and carries the
//! stored access token; on native targets both seams fall back to shared
//! in-memory singletons so the app stays usable in development.

use api::{AuthApi, NotesApi};

use crate::session::SessionStore;

/// Build the REST client for this platform.
pub fn make_client() -> impl NotesApi + AuthApi + Clone {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        let client = api::ApiClient::new(origin);
        match crate::session::WebSession::new().access() {
            Some(token) => client.with_token(token),
            None => client,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        static BACKEND: OnceLock<api::MemoryBackend> = OnceLock::new();
        BACKEND.get_or_init(api::MemoryBackend::new).clone()
    }
}

/// Build the session store for this platform.
pub fn make_session() -> impl SessionStore {
    #[cfg(target_arch = "wasm32")]
    {
        crate::session::WebSession::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        static SESSION: OnceLock<crate::session::MemorySession> = OnceLock::new();
        SESSION.get_or_init(crate::session::MemorySession::new).clone()
    }
}
