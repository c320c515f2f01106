use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use shared::{
    config::{DatabaseConfig, StoreBackend},
    error::AppResult,
};

pub mod dynamo;
pub mod memory;
pub mod model;
pub mod query;

use dynamo::DynamoItemStore;
use memory::InMemoryItemStore;
use query::QueryParams;

pub type Item = HashMap<String, AttributeValue>;

// Query 1 回分の結果。last_evaluated_key があれば続きのページが存在する
#[derive(Debug, Default)]
pub struct QueryPage {
    pub items: Vec<Item>,
    pub last_evaluated_key: Option<Item>,
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn get_item(&self, table_name: &str, key: Item) -> AppResult<Option<Item>>;
    async fn put_item(&self, table_name: &str, item: Item) -> AppResult<()>;
    async fn delete_item(&self, table_name: &str, key: Item) -> AppResult<()>;
    async fn query(&self, params: &QueryParams) -> AppResult<QueryPage>;
    async fn scan(&self, table_name: &str) -> AppResult<Vec<Item>>;
    async fn health_check(&self, table_name: &str) -> bool;
}

#[derive(Clone)]
pub struct StoreClient {
    store: Arc<dyn ItemStore>,
    config: Arc<DatabaseConfig>,
}

impl StoreClient {
    pub fn new(store: Arc<dyn ItemStore>, config: DatabaseConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn inner_ref(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}

pub async fn connect_store_with(cfg: &DatabaseConfig) -> StoreClient {
    let store: Arc<dyn ItemStore> = match cfg.backend {
        StoreBackend::DynamoDb => Arc::new(DynamoItemStore::new(cfg.endpoint_url.as_deref()).await),
        StoreBackend::Memory => Arc::new(InMemoryItemStore::for_config(cfg)),
    };
    StoreClient::new(store, cfg.clone())
}
