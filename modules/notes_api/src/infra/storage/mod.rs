//! Single-table persistence: storage port, key construction, record
//! mapping and the notes store client.

pub mod client;
pub mod dynamo;
pub mod keys;
pub mod memory;
pub mod record;

pub use client::NotesStore;
pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;

use keys::DbKey;

/// Flat attribute representation of one stored record.
pub type Item = HashMap<String, AttributeValue>;

/// Port for the managed key-value store.
///
/// Object-safe and async-friendly via `async_trait`. The store addresses
/// items by the composite `PK`/`SK` string attributes carried inside each
/// item; consistency is whatever the backing store provides natively.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Put one item, replacing any existing item with the same key.
    async fn put_item(&self, item: Item) -> anyhow::Result<()>;

    /// All items whose hash attribute equals `hash_value`, in sort-key
    /// order.
    async fn query_hash(&self, hash_value: &str) -> anyhow::Result<Vec<Item>>;

    /// Items matching the exact hash+sort pair.
    async fn query_exact(&self, key: &DbKey) -> anyhow::Result<Vec<Item>>;

    /// Delete the item at `key`. Deleting an absent item is not an error.
    async fn delete_item(&self, key: &DbKey) -> anyhow::Result<()>;
}
