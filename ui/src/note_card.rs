//! Single note in the dashboard list.

use api::Note;
use dioxus::prelude::*;

/// One note with its delete button. Deletion is reported upward by id.
#[component]
pub fn NoteCard(note: Note, on_delete: EventHandler<i64>) -> Element {
    let id = note.id;

    rsx! {
        div {
            class: "note-card",

            div {
                class: "note-card-header",
                h3 { class: "note-card-title", "{note.title}" }
                button {
                    class: "note-delete",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
            p { class: "note-card-content", "{note.content}" }
        }
    }
}
