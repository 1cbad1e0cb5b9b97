//! Conversion between domain entities and the flat attribute
//! representation the store holds.

use aws_sdk_dynamodb::types::AttributeValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_dynamo::aws_sdk_dynamodb_1::{from_items, to_item};

use super::keys::DbKey;
use super::Item;
use crate::domain::error::NotesError;

/// Serializes an entity and injects the composite key attributes.
///
/// Injection happens after generic field serialization and overwrites any
/// same-named attributes the entity produced.
pub fn to_record<T: Serialize>(entity: &T, key: &DbKey) -> Result<Item, NotesError> {
    let mut item: Item = to_item(entity)?;
    item.insert(
        key.hash.key.to_string(),
        AttributeValue::S(key.hash.value.clone()),
    );
    item.insert(
        key.sort.key.to_string(),
        AttributeValue::S(key.sort.value.clone()),
    );
    Ok(item)
}

/// Decodes a query result back into domain entities. The key attributes
/// are not entity fields and are ignored.
pub fn from_records<T: DeserializeOwned>(items: Vec<Item>) -> Result<Vec<T>, NotesError> {
    Ok(from_items(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::User;
    use crate::infra::storage::keys::user_key;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
        }
    }

    #[test]
    fn to_record_injects_key_attributes() {
        let user = sample_user();
        let item = to_record(&user, &user_key(&user.email)).unwrap();

        assert_eq!(item["PK"], AttributeValue::S("user".to_string()));
        assert_eq!(item["SK"], AttributeValue::S("ada@example.com".to_string()));
        assert_eq!(item["ID"], AttributeValue::S("u-1".to_string()));
    }

    #[test]
    fn key_injection_overwrites_same_named_fields() {
        #[derive(serde::Serialize)]
        struct Clashing {
            #[serde(rename = "PK")]
            pk: String,
            #[serde(rename = "SK")]
            sk: String,
        }

        let entity = Clashing {
            pk: "stale-hash".to_string(),
            sk: "stale-sort".to_string(),
        };
        let item = to_record(&entity, &user_key("ada@example.com")).unwrap();

        assert_eq!(item["PK"], AttributeValue::S("user".to_string()));
        assert_eq!(item["SK"], AttributeValue::S("ada@example.com".to_string()));
    }

    #[test]
    fn records_round_trip_ignoring_key_attributes() {
        let user = sample_user();
        let item = to_record(&user, &user_key(&user.email)).unwrap();

        let decoded: Vec<User> = from_records(vec![item]).unwrap();
        assert_eq!(decoded, vec![user]);
    }
}
