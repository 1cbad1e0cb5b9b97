//! Notes backend: users own topics, topics own notes, every record lives
//! in one key-value table addressed by composite `PK`/`SK` keys.
//!
//! The embedding HTTP front end routes requests to the handlers in
//! [`api`]; all persistence goes through [`NotesStore`], constructed once
//! at startup and shared for the life of the process.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use api::Response;
pub use config::NotesConfig;
pub use domain::error::NotesError;
pub use domain::model::{Note, NoteInsert, Topic, User, UserInsert};
pub use infra::storage::{KeyValueStore, MemoryStore, NotesStore};

use tokio::sync::OnceCell;

static STORE: OnceCell<NotesStore> = OnceCell::const_new();

/// Initializes the process-wide store client. Subsequent calls return the
/// already-initialized client; there is no teardown beyond process exit.
pub async fn init_store(config: &NotesConfig) -> anyhow::Result<&'static NotesStore> {
    STORE
        .get_or_try_init(|| async { NotesStore::connect(config).await })
        .await
}

/// The process-wide store client, once [`init_store`] has completed.
pub fn store() -> Option<&'static NotesStore> {
    STORE.get()
}
