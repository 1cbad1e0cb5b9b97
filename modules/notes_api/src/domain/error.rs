//! Domain error taxonomy.
//!
//! Every variant bubbles unchanged to the handler boundary, which maps it
//! to a status code and an error body. There are no retries and no partial
//! success: each operation is all-or-nothing at the single-item level.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    /// Malformed or unparseable request body.
    #[error("{message}")]
    Validation { message: String },

    /// An underlying store call failed.
    #[error("store error: {message}")]
    Store { message: String },

    /// The store returned more than one record for a key expected to be
    /// unique. Integrity violation in the backing table, fatal class.
    #[error("more than one record for key {key}: {detail}")]
    AmbiguousRecord { key: String, detail: String },

    /// A note operation targeted a topic that does not exist.
    #[error("unknown topic {title:?} for user {user_id:?}")]
    UnknownTopic { title: String, user_id: String },

    /// An entity could not be converted to or from the stored attribute
    /// representation.
    #[error("record serialization failed: {source}")]
    Serialization {
        #[from]
        source: serde_dynamo::Error,
    },
}

impl NotesError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Wraps a store failure, keeping the full context chain in the
    /// message.
    pub fn store(err: anyhow::Error) -> Self {
        Self::Store {
            message: format!("{err:#}"),
        }
    }

    pub fn ambiguous_record(key: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::AmbiguousRecord {
            key: key.into(),
            detail: detail.into(),
        }
    }

    pub fn unknown_topic(title: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::UnknownTopic {
            title: title.into(),
            user_id: user_id.into(),
        }
    }
}
