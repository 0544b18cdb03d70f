//! Catch-all 404 page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h1 { "404" }
            p { "No page at /{path}." }
            Link { to: Route::Home {}, "Go home" }
        }
    }
}
