//! Composite hash/sort key construction for the single notes table.
//!
//! Every record is addressed by two string attributes: hash key `PK` and
//! sort key `SK`. User records share the constant `user` hash and sort by
//! email; topic records hash by `topic#<user id>` and sort by title. This
//! layout is what existing data holds and must not drift.

/// Hash key attribute name.
pub const HASH_KEY: &str = "PK";
/// Sort key attribute name.
pub const SORT_KEY: &str = "SK";

const USER_PREFIX: &str = "user";
const TOPIC_PREFIX: &str = "topic";

/// One half of a composite key: attribute name plus value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: &'static str,
    pub value: String,
}

/// Full composite key addressing exactly one stored item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbKey {
    pub hash: KeyValue,
    pub sort: KeyValue,
}

/// Key for a user record: constant hash, email as sort.
pub fn user_key(email: &str) -> DbKey {
    DbKey {
        hash: KeyValue {
            key: HASH_KEY,
            value: USER_PREFIX.to_string(),
        },
        sort: KeyValue {
            key: SORT_KEY,
            value: email.to_string(),
        },
    }
}

/// Key for a topic record: hash scoped to the owning user, title as sort.
pub fn topic_key(user_id: &str, title: &str) -> DbKey {
    DbKey {
        hash: KeyValue {
            key: HASH_KEY,
            value: format!("{TOPIC_PREFIX}#{user_id}"),
        },
        sort: KeyValue {
            key: SORT_KEY,
            value: title.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_key_uses_constant_hash_and_email_sort() {
        let key = user_key("ada@example.com");
        assert_eq!(key.hash.key, "PK");
        assert_eq!(key.hash.value, "user");
        assert_eq!(key.sort.key, "SK");
        assert_eq!(key.sort.value, "ada@example.com");
    }

    #[test]
    fn topic_key_scopes_hash_to_owning_user() {
        let key = topic_key("u-1", "rust");
        assert_eq!(key.hash.value, "topic#u-1");
        assert_eq!(key.sort.value, "rust");
    }

    #[test]
    fn topic_keys_differ_per_user_for_same_title() {
        assert_ne!(topic_key("u-1", "rust"), topic_key("u-2", "rust"));
    }
}
