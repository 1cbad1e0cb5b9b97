//! DynamoDB implementation of the storage port.

use anyhow::Context;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use super::keys::{DbKey, HASH_KEY, SORT_KEY};
use super::{Item, KeyValueStore};
use crate::config::NotesConfig;

/// Client for one DynamoDB table. Constructed once at startup and shared
/// for the life of the process; AWS credentials and region come from the
/// ambient environment.
pub struct DynamoStore {
    client: Client,
    table: String,
}

impl DynamoStore {
    /// Resolves AWS configuration from the environment and builds the
    /// table client. `endpoint_url` in the config overrides the resolved
    /// endpoint (local DynamoDB).
    pub async fn connect(config: &NotesConfig) -> anyhow::Result<Self> {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let mut builder = aws_sdk_dynamodb::config::Builder::from(&aws_config);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            table: config.table.clone(),
        })
    }
}

#[async_trait]
impl KeyValueStore for DynamoStore {
    async fn put_item(&self, item: Item) -> anyhow::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item))
            .send()
            .await
            .context("dynamo put item")?;
        Ok(())
    }

    async fn query_hash(&self, hash_value: &str) -> anyhow::Result<Vec<Item>> {
        let resp = self
            .client
            .query()
            .table_name(&self.table)
            .key_condition_expression(format!("{HASH_KEY} = :pk"))
            .expression_attribute_values(":pk", AttributeValue::S(hash_value.to_string()))
            .send()
            .await
            .context("dynamo query")?;
        Ok(resp.items.unwrap_or_default())
    }

    async fn query_exact(&self, key: &DbKey) -> anyhow::Result<Vec<Item>> {
        let resp = self
            .client
            .query()
            .table_name(&self.table)
            .key_condition_expression(format!("{HASH_KEY} = :pk AND {SORT_KEY} = :sk"))
            .expression_attribute_values(":pk", AttributeValue::S(key.hash.value.clone()))
            .expression_attribute_values(":sk", AttributeValue::S(key.sort.value.clone()))
            .send()
            .await
            .context("dynamo query")?;
        Ok(resp.items.unwrap_or_default())
    }

    async fn delete_item(&self, key: &DbKey) -> anyhow::Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table)
            .key(key.hash.key, AttributeValue::S(key.hash.value.clone()))
            .key(key.sort.key, AttributeValue::S(key.sort.value.clone()))
            .send()
            .await
            .context("dynamo delete item")?;
        Ok(())
    }
}
