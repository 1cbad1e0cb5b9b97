//! Shared helpers for the integration tests.

use std::sync::Arc;

use notes_api::{MemoryStore, NoteInsert, NotesStore, UserInsert};

/// Store client over a fresh in-memory backend, plus a handle on the
/// backend for record-level assertions.
pub fn memory_backed() -> (Arc<MemoryStore>, NotesStore) {
    let backend = Arc::new(MemoryStore::new());
    (backend.clone(), NotesStore::new(backend))
}

pub fn user(email: &str) -> UserInsert {
    UserInsert {
        email: email.to_string(),
        name: "Ada".to_string(),
        surname: "Lovelace".to_string(),
    }
}

pub fn note(title: &str, content: &str) -> NoteInsert {
    NoteInsert {
        title: title.to_string(),
        content: content.to_string(),
    }
}
