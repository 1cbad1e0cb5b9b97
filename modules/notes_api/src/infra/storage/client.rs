//! Notes store client: the only component that talks to the persistent
//! store. Composes key construction and record mapping around single-item
//! put/query/delete calls.
//!
//! # Invariants
//! - A hash+sort pair addresses at most one stored item; more than one
//!   match is an integrity violation, not a recoverable state.
//! - A topic's note list is only ever replaced whole. Note mutations are
//!   read-modify-write without a version check, so two concurrent edits of
//!   the same topic race and the last writer wins at the item level.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::keys::{topic_key, user_key};
use super::record::{from_records, to_record};
use super::{DynamoStore, KeyValueStore};
use crate::config::NotesConfig;
use crate::domain::error::NotesError;
use crate::domain::model::{Note, NoteInsert, Topic, User, UserInsert};

/// Long-lived client for the notes table.
#[derive(Clone)]
pub struct NotesStore {
    store: Arc<dyn KeyValueStore>,
}

impl NotesStore {
    /// Wraps an already-constructed storage backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Connects to DynamoDB using ambient AWS configuration.
    pub async fn connect(config: &NotesConfig) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(DynamoStore::connect(config).await?)))
    }

    /// Inserts a user, idempotent by email: when a user with that email
    /// already exists it is returned unchanged and no duplicate record is
    /// created.
    #[instrument(skip(self, insert), fields(email = %insert.email))]
    pub async fn insert_user(&self, insert: UserInsert) -> Result<User, NotesError> {
        if let Some(existing) = self.get_user_by_email(&insert.email).await? {
            debug!(user_id = %existing.id, "user already present");
            return Ok(existing);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: insert.email,
            name: insert.name,
            surname: insert.surname,
        };

        let item = to_record(&user, &user_key(&user.email))?;
        self.store.put_item(item).await.map_err(NotesError::store)?;
        debug!(user_id = %user.id, "user inserted");
        Ok(user)
    }

    /// Looks a user up by email. Zero matches is `None`; more than one
    /// means the backing table lost its uniqueness invariant.
    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, NotesError> {
        let items = self
            .store
            .query_exact(&user_key(email))
            .await
            .map_err(NotesError::store)?;
        let mut users: Vec<User> = from_records(items)?;

        match users.len() {
            0 => Ok(None),
            1 => Ok(users.pop()),
            n => Err(NotesError::ambiguous_record(
                format!("user/{email}"),
                format!("{n} users share this email"),
            )),
        }
    }

    /// Writes a fresh topic with an empty note list. The put is
    /// unconditional: an existing topic under the same key is fully
    /// replaced, notes included.
    #[instrument(skip(self))]
    pub async fn insert_topic(&self, user_id: &str, title: &str) -> Result<(), NotesError> {
        let now = Utc::now();
        let topic = Topic {
            title: title.to_string(),
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.put_topic(user_id, &topic).await
    }

    /// Deletes the topic item. Deleting a topic that was never created is
    /// not an error.
    #[instrument(skip(self))]
    pub async fn delete_topic(&self, user_id: &str, title: &str) -> Result<(), NotesError> {
        self.store
            .delete_item(&topic_key(user_id, title))
            .await
            .map_err(NotesError::store)
    }

    /// All topics owned by the user, in title order. Empty when the user
    /// has none.
    #[instrument(skip(self))]
    pub async fn get_all_for_user(&self, user_id: &str) -> Result<Vec<Topic>, NotesError> {
        let hash = topic_key(user_id, "").hash.value;
        let items = self
            .store
            .query_hash(&hash)
            .await
            .map_err(NotesError::store)?;
        from_records(items)
    }

    /// Fetches one topic by exact key. Zero matches is `None`; more than
    /// one means the backing table lost its uniqueness invariant.
    #[instrument(skip(self))]
    pub async fn get_user_topic_by_title(
        &self,
        user_id: &str,
        title: &str,
    ) -> Result<Option<Topic>, NotesError> {
        let items = self
            .store
            .query_exact(&topic_key(user_id, title))
            .await
            .map_err(NotesError::store)?;
        let mut topics: Vec<Topic> = from_records(items)?;

        match topics.len() {
            0 => Ok(None),
            1 => Ok(topics.pop()),
            n => Err(NotesError::ambiguous_record(
                format!("topic/{user_id}/{title}"),
                format!("{n} topics share this title"),
            )),
        }
    }

    /// Appends a note to an existing topic and rewrites the whole topic
    /// item. Append order is the only ordering guarantee; duplicate note
    /// titles are not rejected.
    #[instrument(skip(self, note), fields(note_title = %note.title))]
    pub async fn insert_note(
        &self,
        user_id: &str,
        title: &str,
        note: NoteInsert,
    ) -> Result<(), NotesError> {
        let mut topic = self
            .get_user_topic_by_title(user_id, title)
            .await?
            .ok_or_else(|| NotesError::unknown_topic(title, user_id))?;

        let now = Utc::now();
        topic.notes.push(Note {
            title: note.title,
            content: note.content,
            created_at: now,
            updated_at: now,
        });
        topic.updated_at = now;

        self.put_topic(user_id, &topic).await
    }

    /// Removes every note whose title equals `note_title` and rewrites the
    /// topic item. When nothing matches the topic is rewritten unchanged;
    /// that is not an error.
    #[instrument(skip(self))]
    pub async fn delete_note(
        &self,
        user_id: &str,
        title: &str,
        note_title: &str,
    ) -> Result<(), NotesError> {
        let mut topic = self
            .get_user_topic_by_title(user_id, title)
            .await?
            .ok_or_else(|| NotesError::unknown_topic(title, user_id))?;

        let before = topic.notes.len();
        topic.notes.retain(|note| note.title != note_title);
        if topic.notes.len() != before {
            topic.updated_at = Utc::now();
        }
        debug!(removed = before - topic.notes.len(), "notes removed");

        self.put_topic(user_id, &topic).await
    }

    async fn put_topic(&self, user_id: &str, topic: &Topic) -> Result<(), NotesError> {
        let item = to_record(topic, &topic_key(user_id, &topic.title))?;
        self.store.put_item(item).await.map_err(NotesError::store)
    }
}
