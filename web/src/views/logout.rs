//! Logout: drop the stored session and return to the login screen.

use dioxus::prelude::*;
use ui::{make_session, SessionStore};

use crate::Route;

#[component]
pub fn Logout() -> Element {
    let nav = use_navigator();

    make_session().clear();
    nav.replace(Route::Login {});

    rsx! {}
}
