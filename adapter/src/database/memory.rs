use std::{
    collections::{BTreeMap, HashMap},
    ops::Bound,
    sync::{PoisonError, RwLock},
};

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use shared::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

use super::{query::QueryParams, Item, ItemStore, QueryPage};

#[derive(Debug, Clone)]
pub struct TableSchema {
    name: String,
    partition_key: String,
    sort_key: Option<String>,
    // インデックス名 -> パーティションキー属性名
    indexes: HashMap<String, String>,
}

impl TableSchema {
    pub fn new(name: &str, partition_key: &str, sort_key: Option<&str>) -> Self {
        Self {
            name: name.into(),
            partition_key: partition_key.into(),
            sort_key: sort_key.map(Into::into),
            indexes: HashMap::new(),
        }
    }

    pub fn with_index(mut self, index_name: &str, partition_key: &str) -> Self {
        self.indexes.insert(index_name.into(), partition_key.into());
        self
    }

    fn key_attributes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.partition_key.as_str()).chain(self.sort_key.as_deref())
    }

    // 主キー属性から BTreeMap 上の並び順を決める文字列を作る
    fn storage_key(&self, item: &Item) -> AppResult<String> {
        let mut parts = Vec::with_capacity(2);
        for name in self.key_attributes() {
            let value = item.get(name).ok_or_else(|| {
                AppError::StoreOperationError(format!(
                    "The provided key element does not match the schema of table {}: missing {name}",
                    self.name
                ))
            })?;
            parts.push(encode_key_value(value)?);
        }
        Ok(parts.join("\u{0}"))
    }

    fn primary_key_of(&self, item: &Item) -> Item {
        self.key_attributes()
            .filter_map(|name| item.get(name).map(|v| (name.to_string(), v.clone())))
            .collect()
    }
}

fn encode_key_value(value: &AttributeValue) -> AppResult<String> {
    match value {
        AttributeValue::S(s) => Ok(format!("S:{s}")),
        AttributeValue::N(n) => Ok(format!("N:{n}")),
        other => Err(AppError::StoreOperationError(format!(
            "unsupported key attribute type: {other:?}"
        ))),
    }
}

struct Table {
    schema: TableSchema,
    items: BTreeMap<String, Item>,
}

/// Process-local store with DynamoDB-like keys, indexes and paging.
#[derive(Default)]
pub struct InMemoryItemStore {
    tables: RwLock<HashMap<String, Table>>,
}

fn poisoned<T>(_: PoisonError<T>) -> AppError {
    AppError::StoreOperationError("in-memory store lock poisoned".into())
}

fn table_not_found(table_name: &str) -> AppError {
    AppError::StoreOperationError(format!(
        "Requested resource not found: table {table_name}"
    ))
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, schema: TableSchema) -> Self {
        self.tables
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(
                schema.name.clone(),
                Table {
                    schema,
                    items: BTreeMap::new(),
                },
            );
        self
    }

    // 予約テーブルと物件テーブルを本番と同じキー構成で用意する
    pub fn for_config(cfg: &DatabaseConfig) -> Self {
        Self::new()
            .with_table(
                TableSchema::new(&cfg.reservation_table, "customerId", Some("id"))
                    .with_index(&cfg.reservation_by_property_index, "propertyId"),
            )
            .with_table(TableSchema::new(&cfg.property_table, "id", None))
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn get_item(&self, table_name: &str, key: Item) -> AppResult<Option<Item>> {
        let tables = self.tables.read().map_err(poisoned)?;
        let table = tables
            .get(table_name)
            .ok_or_else(|| table_not_found(table_name))?;
        let storage_key = table.schema.storage_key(&key)?;
        Ok(table.items.get(&storage_key).cloned())
    }

    async fn put_item(&self, table_name: &str, item: Item) -> AppResult<()> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        let table = tables
            .get_mut(table_name)
            .ok_or_else(|| table_not_found(table_name))?;
        let storage_key = table.schema.storage_key(&item)?;
        table.items.insert(storage_key, item);
        Ok(())
    }

    async fn delete_item(&self, table_name: &str, key: Item) -> AppResult<()> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        let table = tables
            .get_mut(table_name)
            .ok_or_else(|| table_not_found(table_name))?;
        let storage_key = table.schema.storage_key(&key)?;
        table.items.remove(&storage_key);
        Ok(())
    }

    async fn query(&self, params: &QueryParams) -> AppResult<QueryPage> {
        if params.limit < 1 {
            return Err(AppError::StoreOperationError(
                "Limit must be greater than or equal to 1".into(),
            ));
        }
        let tables = self.tables.read().map_err(poisoned)?;
        let table = tables
            .get(&params.table_name)
            .ok_or_else(|| table_not_found(&params.table_name))?;

        let expected_key = match &params.index_name {
            Some(index) => table.schema.indexes.get(index).ok_or_else(|| {
                AppError::StoreOperationError(format!(
                    "The table does not have the specified index: {index}"
                ))
            })?,
            None => &table.schema.partition_key,
        };
        if *expected_key != params.key_name {
            return Err(AppError::StoreOperationError(format!(
                "Query condition missed key schema element: {expected_key}"
            )));
        }

        let lower = match &params.exclusive_start_key {
            Some(start) => Bound::Excluded(table.schema.storage_key(start)?),
            None => Bound::Unbounded,
        };
        let limit = params.limit as usize;
        let items: Vec<Item> = table
            .items
            .range((lower, Bound::Unbounded))
            .map(|(_, item)| item)
            .filter(|item| item.get(&params.key_name) == Some(&params.key_value))
            .take(limit)
            .cloned()
            .collect();

        // DynamoDB と同様に、ページが埋まった場合は続きの有無にかかわらず継続キーを返す
        let last_evaluated_key = if items.len() == limit {
            items.last().map(|last| {
                let mut key = table.schema.primary_key_of(last);
                if let Some(value) = last.get(&params.key_name) {
                    key.insert(params.key_name.clone(), value.clone());
                }
                key
            })
        } else {
            None
        };

        Ok(QueryPage {
            items,
            last_evaluated_key,
        })
    }

    async fn scan(&self, table_name: &str) -> AppResult<Vec<Item>> {
        let tables = self.tables.read().map_err(poisoned)?;
        let table = tables
            .get(table_name)
            .ok_or_else(|| table_not_found(table_name))?;
        Ok(table.items.values().cloned().collect())
    }

    async fn health_check(&self, table_name: &str) -> bool {
        self.tables
            .read()
            .map(|tables| tables.contains_key(table_name))
            .unwrap_or(false)
    }
}
