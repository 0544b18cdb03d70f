//! Login page.

use dioxus::prelude::*;
use ui::{AuthForm, AuthMode, NavTarget};

use crate::Route;

/// Backend endpoint issuing the access/refresh token pair.
const LOGIN_ROUTE: &str = "/api/token/";

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        AuthForm {
            route: LOGIN_ROUTE,
            mode: AuthMode::Login,
            on_navigate: move |target| match target {
                NavTarget::Home => {
                    nav.replace(Route::Home {});
                }
                NavTarget::Login => {
                    nav.replace(Route::Login {});
                }
            },
        }

        p {
            class: "auth-alt",
            "Don't have an account? "
            Link { to: Route::Register {}, "Register" }
        }
    }
}
