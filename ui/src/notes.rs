//! Notes feed: local cache over the remote collection.
//!
//! Two reconciliation strategies, deliberately distinct: load and create
//! replace the whole cache from the server (create is a POST followed by a
//! full refetch, never an optimistic insert), while delete splices the
//! entry out locally without a refetch.

use api::{ApiError, Note, NoteDraft, NotesApi};
use dioxus::prelude::*;

/// Whether a create attempt actually reached the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CreateOutcome {
    Created,
    /// An empty or whitespace-only field; no request was issued.
    Skipped,
}

/// Local cache of the remote notes collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotesFeed {
    notes: Vec<Note>,
}

impl NotesFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Replace the whole cache with the server's collection. On failure the
    /// cache is left as it was; stale data stays on screen.
    pub async fn load(&mut self, api: &impl NotesApi) -> Result<(), ApiError> {
        self.notes = api.list_notes().await?;
        Ok(())
    }

    /// POST a new note, then reconcile by full refetch.
    ///
    /// Fields that trim to empty skip the request entirely. The untrimmed
    /// values are what gets sent; trimming is only the validity check.
    pub async fn create(
        &mut self,
        api: &impl NotesApi,
        title: &str,
        content: &str,
    ) -> Result<CreateOutcome, ApiError> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Ok(CreateOutcome::Skipped);
        }
        let draft = NoteDraft {
            title: title.to_string(),
            content: content.to_string(),
        };
        api.create_note(&draft).await?;
        self.load(api).await?;
        Ok(CreateOutcome::Created)
    }

    /// DELETE by id, then remove the matching entry locally. Nothing else
    /// in the cache is touched, and no refetch happens.
    pub async fn delete(&mut self, api: &impl NotesApi, id: i64) -> Result<(), ApiError> {
        api.delete_note(id).await?;
        self.notes.retain(|note| note.id != id);
        Ok(())
    }
}

/// Fetch the collection once on mount, replacing `feed` on success.
///
/// The resource must not read `feed` (or any other signal): a tracked read
/// here would re-trigger the resource through its own `set`. Load is
/// replace-all, so it starts from an empty feed instead.
pub fn use_notes_load<A>(api: A, mut feed: Signal<NotesFeed>) -> Resource<()>
where
    A: NotesApi + Clone + 'static,
{
    use_resource(move || {
        let api = api.clone();
        async move {
            let mut fresh = NotesFeed::new();
            match fresh.load(&api).await {
                Ok(()) => feed.set(fresh),
                Err(err) => alert(&err.to_string()),
            }
        }
    })
}

/// Blocking alert for notes-screen failures; logs where no browser alert
/// exists.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::error!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use reqwest::StatusCode;

    use super::*;

    /// NotesApi fake over a scripted collection, counting every request.
    #[derive(Default)]
    struct ScriptedNotes {
        notes: Mutex<Vec<Note>>,
        last_draft: Mutex<Option<NoteDraft>>,
        list_calls: AtomicUsize,
        create_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        fail_lists: bool,
        fail_deletes: bool,
    }

    impl ScriptedNotes {
        fn with_notes(notes: Vec<Note>) -> Self {
            Self {
                notes: Mutex::new(notes),
                ..Self::default()
            }
        }
    }

    impl NotesApi for &ScriptedNotes {
        async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_lists {
                return Err(ApiError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR));
            }
            Ok(self.notes.lock().unwrap().clone())
        }

        async fn create_note(&self, draft: &NoteDraft) -> Result<(), ApiError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_draft.lock().unwrap() = Some(draft.clone());
            let mut notes = self.notes.lock().unwrap();
            let id = notes.iter().map(|note| note.id).max().unwrap_or(0) + 1;
            notes.push(Note {
                id,
                title: draft.title.clone(),
                content: draft.content.clone(),
            });
            Ok(())
        }

        async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_deletes {
                return Err(ApiError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR));
            }
            self.notes.lock().unwrap().retain(|note| note.id != id);
            Ok(())
        }
    }

    fn note(id: i64, title: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: format!("content of {title}"),
        }
    }

    #[tokio::test]
    async fn test_create_issues_one_post_with_both_fields() {
        let api = ScriptedNotes::default();
        let mut feed = NotesFeed::new();

        let outcome = feed.create(&&api, "groceries", "milk, eggs").await.unwrap();

        assert_eq!(outcome, CreateOutcome::Created);
        assert_eq!(api.create_calls.load(Ordering::SeqCst), 1);
        let draft = api.last_draft.lock().unwrap().clone().unwrap();
        assert_eq!(draft.title, "groceries");
        assert_eq!(draft.content, "milk, eggs");
    }

    #[tokio::test]
    async fn test_create_skips_blank_fields_without_a_request() {
        let api = ScriptedNotes::default();
        let mut feed = NotesFeed::new();

        assert_eq!(feed.create(&&api, "", "body").await.unwrap(), CreateOutcome::Skipped);
        assert_eq!(feed.create(&&api, "title", "  \t ").await.unwrap(), CreateOutcome::Skipped);
        assert_eq!(feed.create(&&api, "   ", "").await.unwrap(), CreateOutcome::Skipped);

        assert_eq!(api.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 0);
        assert!(feed.is_empty());
    }

    #[tokio::test]
    async fn test_cache_equals_fresh_load_after_create() {
        let api = ScriptedNotes::with_notes(vec![note(1, "existing")]);
        let mut feed = NotesFeed::new();
        feed.load(&&api).await.unwrap();

        feed.create(&&api, "new note", "body").await.unwrap();

        let mut reloaded = NotesFeed::new();
        reloaded.load(&&api).await.unwrap();
        assert_eq!(feed, reloaded);
        assert_eq!(feed.len(), 2);
        assert!(feed.notes().iter().any(|n| n.title == "new note"));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_the_matching_entry() {
        let api = ScriptedNotes::with_notes(vec![note(1, "a"), note(2, "b"), note(3, "c")]);
        let mut feed = NotesFeed::new();
        feed.load(&&api).await.unwrap();

        feed.delete(&&api, 2).await.unwrap();

        let ids: Vec<i64> = feed.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(feed.notes()[0], note(1, "a"));
        assert_eq!(feed.notes()[1], note(3, "c"));
        // Local splice, no refetch.
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_delete_from_empty_cache_is_harmless() {
        let api = ScriptedNotes::default();
        let mut feed = NotesFeed::new();

        feed.delete(&&api, 7).await.unwrap();
        assert!(feed.is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_cache_unchanged() {
        let api = ScriptedNotes {
            fail_deletes: true,
            ..ScriptedNotes::with_notes(vec![note(1, "a"), note(2, "b")])
        };
        let mut feed = NotesFeed::new();
        feed.load(&&api).await.unwrap();

        assert!(feed.delete(&&api, 1).await.is_err());
        assert_eq!(feed.len(), 2);
    }

    /// Clonable NotesApi counting list fetches, for driving components.
    #[derive(Clone, Default)]
    struct CountingApi {
        notes: Arc<Mutex<Vec<Note>>>,
        list_calls: Arc<AtomicUsize>,
    }

    impl PartialEq for CountingApi {
        fn eq(&self, other: &Self) -> bool {
            Arc::ptr_eq(&self.list_calls, &other.list_calls)
        }
    }

    impl NotesApi for CountingApi {
        async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.notes.lock().unwrap().clone())
        }

        async fn create_note(&self, _draft: &NoteDraft) -> Result<(), ApiError> {
            Ok(())
        }

        async fn delete_note(&self, _id: i64) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[component]
    fn MountLoader(api: CountingApi) -> Element {
        let feed = use_signal(NotesFeed::new);
        let _loader = use_notes_load(api, feed);

        rsx! {
            span { "{feed().len()}" }
        }
    }

    #[tokio::test]
    async fn test_mount_load_fetches_exactly_once() {
        let api = CountingApi::default();
        api.notes.lock().unwrap().push(note(1, "a"));

        let mut dom =
            VirtualDom::new_with_props(MountLoader, MountLoaderProps { api: api.clone() });
        dom.rebuild_in_place();

        // Drive the scheduler until it goes idle. A loader that re-triggers
        // itself through its own write keeps producing work (and fetches)
        // here instead of settling.
        let _ = tokio::time::timeout(Duration::from_millis(250), async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
            }
        })
        .await;

        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_stale_cache() {
        let api = ScriptedNotes::with_notes(vec![note(1, "a")]);
        let mut feed = NotesFeed::new();
        feed.load(&&api).await.unwrap();

        let failing = ScriptedNotes {
            fail_lists: true,
            ..ScriptedNotes::default()
        };
        assert!(feed.load(&&failing).await.is_err());
        assert_eq!(feed.len(), 1);
    }
}
