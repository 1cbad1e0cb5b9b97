//! Wire DTOs for the request handlers.
//!
//! Request and response bodies are camelCase JSON. Fields missing from an
//! otherwise well-formed body decode to empty values and proceed to the
//! store layer; only an unparseable body is rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::model::{Note, NoteInsert, Topic};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDto {
    pub title: String,
    pub notes: Vec<NoteDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `getAllForUser`: the owning user id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetAllForUserReq {
    pub id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertTopicReq {
    pub user_id: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteTopicReq {
    pub user_id: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsertNoteReq {
    pub user_id: String,
    pub title: String,
    pub note: NoteInputDto,
}

/// Note payload inside `insertNote`. Timestamps are stamped by the store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoteInputDto {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetAllNotesReq {
    pub user_id: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteNoteReq {
    pub user_id: String,
    pub title: String,
    pub note_title: String,
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        Self {
            title: topic.title,
            notes: topic.notes.into_iter().map(NoteDto::from).collect(),
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

impl From<NoteInputDto> for NoteInsert {
    fn from(note: NoteInputDto) -> Self {
        Self {
            title: note.title,
            content: note.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_note_request_parses_nested_note() {
        let body = r#"{"userId":"u-1","title":"rust","note":{"title":"n1","content":"c1"}}"#;
        let req: InsertNoteReq = serde_json::from_str(body).unwrap();
        assert_eq!(req.user_id, "u-1");
        assert_eq!(req.note.title, "n1");
        assert_eq!(req.note.content, "c1");
    }

    #[test]
    fn missing_fields_decode_to_empty_values() {
        let req: InsertTopicReq = serde_json::from_str("{}").unwrap();
        assert_eq!(req.user_id, "");
        assert_eq!(req.title, "");

        let req: DeleteNoteReq = serde_json::from_str(r#"{"userId":"u-1"}"#).unwrap();
        assert_eq!(req.user_id, "u-1");
        assert_eq!(req.note_title, "");
    }

    #[test]
    fn topic_dto_serializes_camel_case() {
        use chrono::TimeZone;

        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let dto = TopicDto {
            title: "rust".to_string(),
            notes: vec![],
            created_at: at,
            updated_at: at,
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["title"], "rust");
        assert!(value["createdAt"].is_string());
        assert!(value["updatedAt"].is_string());
        assert_eq!(value["notes"], serde_json::json!([]));
    }
}
