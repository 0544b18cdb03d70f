//! Credential submission flow and the shared login/register form.
//!
//! [`AuthFlow`] is the controller: one call, one POST, one outcome. It only
//! sees the [`AuthApi`] and [`SessionStore`] seams, so the whole flow runs
//! against in-memory fakes in tests. The [`AuthForm`] component wires the
//! flow to signals and leaves actual navigation to the router via an event.

use api::{AuthApi, Credentials};
use dioxus::prelude::*;

use crate::session::SessionStore;

/// Which endpoint semantics a submission follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Navigation signal emitted on success, consumed by the router collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavTarget {
    Home,
    Login,
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Navigate(NavTarget),
    Failed(String),
}

/// One-shot credential submission over the transport and session seams.
pub struct AuthFlow<A, S> {
    api: A,
    session: S,
}

impl<A: AuthApi, S: SessionStore> AuthFlow<A, S> {
    pub fn new(api: A, session: S) -> Self {
        Self { api, session }
    }

    /// Issue exactly one POST of the credentials to `route`.
    ///
    /// Login success persists the token pair and signals the home screen —
    /// even when the response carried no tokens, in which case nothing
    /// usable lands in the store but navigation still proceeds. Register
    /// success signals the login screen and never touches the store.
    pub async fn submit(
        &self,
        mode: AuthMode,
        route: &str,
        username: String,
        password: String,
    ) -> SubmitOutcome {
        let credentials = Credentials { username, password };
        match self.api.submit(route, &credentials).await {
            Ok(tokens) => match mode {
                AuthMode::Login => {
                    self.session.store(&tokens);
                    SubmitOutcome::Navigate(NavTarget::Home)
                }
                AuthMode::Register => SubmitOutcome::Navigate(NavTarget::Login),
            },
            Err(err) => SubmitOutcome::Failed(err.auth_message()),
        }
    }
}

/// Login/registration form, shared by both pages.
///
/// `route` is the backend endpoint the credentials go to; `mode` decides
/// what success means. Navigation is emitted through `on_navigate` so the
/// page maps it onto its router.
#[component]
pub fn AuthForm(route: String, mode: AuthMode, on_navigate: EventHandler<NavTarget>) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let title = match mode {
        AuthMode::Login => "Login",
        AuthMode::Register => "Register",
    };
    let subtitle = match mode {
        AuthMode::Login => "Welcome back! Please sign in to your account",
        AuthMode::Register => "Create your account to get started",
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let route = route.clone();
        spawn(async move {
            // A new attempt replaces any prior error wholesale.
            error.set(None);

            let user = username();
            let pass = password();
            if user.is_empty() || pass.is_empty() {
                // Required inputs keep this from happening in the browser.
                return;
            }

            let flow = AuthFlow::new(crate::make_client(), crate::make_session());
            let outcome = crate::with_busy(
                move |value| loading.set(value),
                flow.submit(mode, &route, user, pass),
            )
            .await;

            match outcome {
                SubmitOutcome::Navigate(target) => on_navigate.call(target),
                SubmitOutcome::Failed(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "{title}" }
            p { class: "auth-subtitle", "{subtitle}" }

            form {
                class: "auth-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    class: "auth-input",
                    r#type: "text",
                    placeholder: "Username",
                    required: true,
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    class: "auth-input",
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Processing..." } else { "{title}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use api::{ApiError, AuthError, TokenPair};

    use super::*;
    use crate::session::MemorySession;

    /// AuthApi fake yielding one scripted result and counting submissions.
    struct ScriptedAuth {
        result: Mutex<Option<Result<TokenPair, ApiError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedAuth {
        fn new(result: Result<TokenPair, ApiError>) -> Self {
            Self {
                result: Mutex::new(Some(result)),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AuthApi for &ScriptedAuth {
        async fn submit(
            &self,
            _route: &str,
            _credentials: &Credentials,
        ) -> Result<TokenPair, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.lock().unwrap().take().expect("one call only")
        }
    }

    #[tokio::test]
    async fn test_login_success_stores_tokens_and_goes_home() {
        let auth = ScriptedAuth::new(Ok(TokenPair::new("A", "R")));
        let session = MemorySession::new();
        let flow = AuthFlow::new(&auth, session.clone());

        let outcome = flow
            .submit(
                AuthMode::Login,
                "/api/token/",
                "alice".to_string(),
                "hunter2".to_string(),
            )
            .await;

        assert_eq!(outcome, SubmitOutcome::Navigate(NavTarget::Home));
        assert_eq!(auth.calls(), 1);
        assert_eq!(session.access().as_deref(), Some("A"));
        assert_eq!(session.refresh().as_deref(), Some("R"));
    }

    #[tokio::test]
    async fn test_login_success_without_tokens_still_navigates() {
        let auth = ScriptedAuth::new(Ok(TokenPair::default()));
        let session = MemorySession::new();
        let flow = AuthFlow::new(&auth, session.clone());

        let outcome = flow
            .submit(
                AuthMode::Login,
                "/api/token/",
                "alice".to_string(),
                "hunter2".to_string(),
            )
            .await;

        assert_eq!(outcome, SubmitOutcome::Navigate(NavTarget::Home));
        assert!(session.access().is_none());
        assert!(session.refresh().is_none());
    }

    #[tokio::test]
    async fn test_register_success_goes_to_login_without_storing() {
        let auth = ScriptedAuth::new(Ok(TokenPair::new("A", "R")));
        let session = MemorySession::new();
        let flow = AuthFlow::new(&auth, session.clone());

        let outcome = flow
            .submit(
                AuthMode::Register,
                "/api/user/register/",
                "alice".to_string(),
                "hunter2".to_string(),
            )
            .await;

        assert_eq!(outcome, SubmitOutcome::Navigate(NavTarget::Login));
        assert!(session.access().is_none());
    }

    #[tokio::test]
    async fn test_failure_surfaces_field_error() {
        let auth = ScriptedAuth::new(Err(AuthError::field("username", "taken").into()));
        let flow = AuthFlow::new(&auth, MemorySession::new());

        let outcome = flow
            .submit(
                AuthMode::Register,
                "/api/user/register/",
                "alice".to_string(),
                "hunter2".to_string(),
            )
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed("taken".to_string()));
    }

    #[tokio::test]
    async fn test_failure_surfaces_detail() {
        let auth = ScriptedAuth::new(Err(AuthError::detail("bad credentials").into()));
        let flow = AuthFlow::new(&auth, MemorySession::new());

        let outcome = flow
            .submit(
                AuthMode::Login,
                "/api/token/",
                "alice".to_string(),
                "nope".to_string(),
            )
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed("bad credentials".to_string()));
    }

    #[tokio::test]
    async fn test_failure_with_empty_body_uses_generic_message() {
        let auth = ScriptedAuth::new(Err(AuthError::default().into()));
        let session = MemorySession::new();
        let flow = AuthFlow::new(&auth, session.clone());

        let outcome = flow
            .submit(
                AuthMode::Login,
                "/api/token/",
                "alice".to_string(),
                "nope".to_string(),
            )
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(api::error::GENERIC_AUTH_MESSAGE.to_string())
        );
        assert!(session.access().is_none());
    }
}
