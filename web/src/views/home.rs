//! Notes dashboard: list, create, delete.

use dioxus::prelude::*;
use ui::{alert, make_client, use_notes_load, with_busy, CreateOutcome, NoteCard, NotesFeed};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let mut feed = use_signal(NotesFeed::new);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut creating = use_signal(|| false);

    // Initial fetch. A failure alerts once and leaves whatever was cached.
    let _loader = use_notes_load(make_client(), feed);

    let handle_delete = move |id: i64| {
        spawn(async move {
            let client = make_client();
            let mut current = feed();
            match current.delete(&client, id).await {
                Ok(()) => feed.set(current),
                Err(err) => alert(&err.to_string()),
            }
        });
    };

    let handle_create = move |_| {
        spawn(async move {
            let client = make_client();
            let mut current = feed();
            let result = with_busy(
                move |value| creating.set(value),
                current.create(&client, &title(), &content()),
            )
            .await;
            match result {
                Ok(CreateOutcome::Created) => {
                    feed.set(current);
                    title.set(String::new());
                    content.set(String::new());
                }
                Ok(CreateOutcome::Skipped) => {}
                Err(err) => alert(&err.to_string()),
            }
        });
    };

    let count = feed().len();
    let blank = title().trim().is_empty() || content().trim().is_empty();

    rsx! {
        div {
            class: "home-page",

            header {
                class: "home-header",
                h1 { "Notes" }
                span {
                    class: "notes-count",
                    {format!("{count} {}", if count == 1 { "note" } else { "notes" })}
                }
                Link { class: "logout-link", to: Route::Logout {}, "Log out" }
            }

            div {
                class: "home-content",

                section {
                    class: "notes-list",
                    h2 { "Your Notes" }

                    if feed().is_empty() {
                        p {
                            class: "empty-state",
                            "No notes yet. Create your first note to get started!"
                        }
                    } else {
                        for note in feed().notes().to_vec() {
                            NoteCard {
                                key: "{note.id}",
                                note: note.clone(),
                                on_delete: handle_delete,
                            }
                        }
                    }
                }

                section {
                    class: "note-composer",
                    h2 { "Create New Note" }

                    label { r#for: "title", "Title" }
                    input {
                        id: "title",
                        r#type: "text",
                        placeholder: "Enter note title...",
                        value: title(),
                        oninput: move |evt| title.set(evt.value()),
                    }

                    label { r#for: "content", "Content" }
                    textarea {
                        id: "content",
                        rows: "6",
                        placeholder: "Write your thoughts here...",
                        value: content(),
                        oninput: move |evt| content.set(evt.value()),
                    }

                    button {
                        class: "create-button",
                        disabled: creating() || blank,
                        onclick: handle_create,
                        if creating() { "Creating..." } else { "Create Note" }
                    }
                }
            }
        }
    }
}
