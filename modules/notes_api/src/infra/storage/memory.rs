//! In-process storage port implementation backed by a sorted map.
//!
//! Serves tests and local development. Hash-only queries return items in
//! sort-key order, matching the range behavior of the managed store.

use std::collections::BTreeMap;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::keys::{DbKey, HASH_KEY, SORT_KEY};
use super::{Item, KeyValueStore};

#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<BTreeMap<(String, String), Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items, for test assertions.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

fn string_attr(item: &Item, name: &str) -> anyhow::Result<String> {
    item.get(name)
        .ok_or_else(|| anyhow!("item is missing the {name} attribute"))?
        .as_s()
        .cloned()
        .map_err(|_| anyhow!("{name} attribute is not a string"))
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn put_item(&self, item: Item) -> anyhow::Result<()> {
        let hash = string_attr(&item, HASH_KEY)?;
        let sort = string_attr(&item, SORT_KEY)?;
        self.items.write().await.insert((hash, sort), item);
        Ok(())
    }

    async fn query_hash(&self, hash_value: &str) -> anyhow::Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .range((hash_value.to_string(), String::new())..)
            .take_while(|((hash, _), _)| hash == hash_value)
            .map(|(_, item)| item.clone())
            .collect())
    }

    async fn query_exact(&self, key: &DbKey) -> anyhow::Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items
            .get(&(key.hash.value.clone(), key.sort.value.clone()))
            .cloned()
            .into_iter()
            .collect())
    }

    async fn delete_item(&self, key: &DbKey) -> anyhow::Result<()> {
        self.items
            .write()
            .await
            .remove(&(key.hash.value.clone(), key.sort.value.clone()));
        Ok(())
    }
}
