//! Domain entities persisted in the single notes table.
//!
//! Serde attribute names follow the stored record layout (`ID`, `Email`,
//! `Title`, `Notes`, ...), so these types marshal directly into the
//! attribute representation the table already holds. Wire DTOs live in
//! `crate::api::dto`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user. `id` is the durable identifier topic keys reference;
/// lookup identity is `email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "ID")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub surname: String,
}

/// Input for the idempotent user insert. The store assigns the id.
#[derive(Debug, Clone)]
pub struct UserInsert {
    pub email: String,
    pub name: String,
    pub surname: String,
}

/// A named collection of notes owned by exactly one user. Identity is the
/// `(user id, title)` pair; the title is unique per user, not globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Topic {
    pub title: String,
    pub notes: Vec<Note>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A note embedded in a topic's note list. Has no storage identity of its
/// own; the whole list is rewritten on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Note {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for a note insert. The store stamps the timestamps.
#[derive(Debug, Clone)]
pub struct NoteInsert {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn user_marshals_with_stored_attribute_names() {
        let user = User {
            id: "42".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["ID"], "42");
        assert_eq!(value["Email"], "ada@example.com");
        assert_eq!(value["Name"], "Ada");
        assert_eq!(value["Surname"], "Lovelace");
    }

    #[test]
    fn topic_marshals_notes_list_with_stored_attribute_names() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let topic = Topic {
            title: "rust".to_string(),
            notes: vec![Note {
                title: "ownership".to_string(),
                content: "moves by default".to_string(),
                created_at: at,
                updated_at: at,
            }],
            created_at: at,
            updated_at: at,
        };

        let value = serde_json::to_value(&topic).unwrap();
        assert_eq!(value["Title"], "rust");
        assert_eq!(value["Notes"][0]["Content"], "moves by default");
        assert!(value["CreatedAt"].is_string());
    }
}
