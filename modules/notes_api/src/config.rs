//! Configuration for the notes storage backend.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotesConfig {
    /// Table holding every record.
    #[serde(default = "default_table")]
    pub table: String,

    /// Endpoint override, e.g. a local DynamoDB instance. When unset the
    /// ambient AWS configuration decides.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            endpoint_url: None,
        }
    }
}

fn default_table() -> String {
    "notes".to_string()
}

impl NotesConfig {
    /// Reads overrides from `NOTES_TABLE` and `NOTES_ENDPOINT_URL`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(table) = std::env::var("NOTES_TABLE") {
            config.table = table;
        }
        if let Ok(endpoint) = std::env::var("NOTES_ENDPOINT_URL") {
            config.endpoint_url = Some(endpoint);
        }
        config
    }
}
