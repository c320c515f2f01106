use async_trait::async_trait;
use aws_sdk_dynamodb::{error::DisplayErrorContext, Client};
use shared::error::{AppError, AppResult};
use tracing::{debug, info};

use super::{query::QueryParams, Item, ItemStore, QueryPage};

pub struct DynamoItemStore {
    client: Client,
}

fn store_error<E>(operation: &str, e: E) -> AppError
where
    E: std::error::Error,
{
    AppError::StoreOperationError(format!(
        "DynamoDB {operation} failed: {}",
        DisplayErrorContext(e)
    ))
}

impl DynamoItemStore {
    pub async fn new(endpoint_url: Option<&str>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        let client = if let Some(endpoint) = endpoint_url {
            let dynamo_config = aws_sdk_dynamodb::config::Builder::from(&config)
                .endpoint_url(endpoint)
                .build();
            Client::from_conf(dynamo_config)
        } else {
            Client::new(&config)
        };

        info!(endpoint = ?endpoint_url, "DynamoDB client configured");
        Self { client }
    }
}

#[async_trait]
impl ItemStore for DynamoItemStore {
    async fn get_item(&self, table_name: &str, key: Item) -> AppResult<Option<Item>> {
        let output = self
            .client
            .get_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|e| store_error("get_item", e))?;
        Ok(output.item)
    }

    async fn put_item(&self, table_name: &str, item: Item) -> AppResult<()> {
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| store_error("put_item", e))?;
        Ok(())
    }

    async fn delete_item(&self, table_name: &str, key: Item) -> AppResult<()> {
        self.client
            .delete_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|e| store_error("delete_item", e))?;
        Ok(())
    }

    async fn query(&self, params: &QueryParams) -> AppResult<QueryPage> {
        let output = self
            .client
            .query()
            .table_name(&params.table_name)
            .set_index_name(params.index_name.clone())
            .key_condition_expression("#pk = :pk")
            .expression_attribute_names("#pk", &params.key_name)
            .expression_attribute_values(":pk", params.key_value.clone())
            .limit(params.limit)
            .set_exclusive_start_key(params.exclusive_start_key.clone())
            .send()
            .await
            .map_err(|e| store_error("query", e))?;

        let items = output.items.unwrap_or_default();
        debug!(
            table = %params.table_name,
            index = ?params.index_name,
            items = items.len(),
            has_more = output.last_evaluated_key.is_some(),
            "DynamoDB query page"
        );
        Ok(QueryPage {
            items,
            last_evaluated_key: output.last_evaluated_key,
        })
    }

    async fn scan(&self, table_name: &str) -> AppResult<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key: Option<Item> = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| store_error("scan", e))?;
            items.extend(output.items.unwrap_or_default());
            match output.last_evaluated_key {
                Some(key) => start_key = Some(key),
                None => break,
            }
        }
        Ok(items)
    }

    async fn health_check(&self, table_name: &str) -> bool {
        self.client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .inspect_err(|e| {
                tracing::warn!(table = %table_name, error = %DisplayErrorContext(e), "DynamoDB health check failed")
            })
            .is_ok()
    }
}
