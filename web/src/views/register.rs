//! Registration page.

use dioxus::prelude::*;
use ui::{AuthForm, AuthMode, NavTarget};

use crate::Route;

/// Backend endpoint creating a new account.
const REGISTER_ROUTE: &str = "/api/user/register/";

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        AuthForm {
            route: REGISTER_ROUTE,
            mode: AuthMode::Register,
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
            "Already have an account? "
            Link { to: Route::Login {}, "Login" }
        }
    }
}
