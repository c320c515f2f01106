use aws_sdk_dynamodb::types::AttributeValue;
use futures::{stream, Stream, TryStreamExt};
use shared::error::AppResult;

use super::{Item, ItemStore};

/// Equality condition on a partition key, optionally against a secondary index.
#[derive(Debug, Clone)]
pub struct QueryParams {
    pub table_name: String,
    pub index_name: Option<String>,
    pub key_name: String,
    pub key_value: AttributeValue,
    pub limit: i32,
    pub exclusive_start_key: Option<Item>,
}

impl QueryParams {
    pub fn new(
        table_name: impl Into<String>,
        key_name: impl Into<String>,
        key_value: AttributeValue,
        limit: i32,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            index_name: None,
            key_name: key_name.into(),
            key_value,
            limit,
            exclusive_start_key: None,
        }
    }

    pub fn with_index(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }
}

/// Lazily yields one page per store call. The next call is issued only after
/// the previous page reported a continuation key.
pub fn query_pages(
    store: &dyn ItemStore,
    params: QueryParams,
) -> impl Stream<Item = AppResult<Vec<Item>>> + Send + '_ {
    stream::try_unfold(Some(params), move |next| async move {
        let Some(params) = next else {
            return Ok(None);
        };
        let page = store.query(&params).await?;
        let next = page.last_evaluated_key.map(|key| QueryParams {
            exclusive_start_key: Some(key),
            ..params
        });
        Ok(Some((page.items, next)))
    })
}

/// Collects every matching item, in store order, across all pages.
pub async fn query_all(store: &dyn ItemStore, params: QueryParams) -> AppResult<Vec<Item>> {
    let table_name = params.table_name.clone();
    let mut pages = std::pin::pin!(query_pages(store, params));
    let mut items = Vec::new();
    let mut page_count = 0usize;
    while let Some(page) = pages.try_next().await? {
        page_count += 1;
        items.extend(page);
    }
    tracing::debug!(
        table = %table_name,
        pages = page_count,
        items = items.len(),
        "query completed"
    );
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{
        memory::{InMemoryItemStore, TableSchema},
        QueryPage,
    };
    use async_trait::async_trait;
    use shared::error::AppError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingStore {
        inner: InMemoryItemStore,
        queries: AtomicUsize,
    }

    #[async_trait]
    impl ItemStore for CountingStore {
        async fn get_item(&self, table_name: &str, key: Item) -> AppResult<Option<Item>> {
            self.inner.get_item(table_name, key).await
        }
        async fn put_item(&self, table_name: &str, item: Item) -> AppResult<()> {
            self.inner.put_item(table_name, item).await
        }
        async fn delete_item(&self, table_name: &str, key: Item) -> AppResult<()> {
            self.inner.delete_item(table_name, key).await
        }
        async fn query(&self, params: &QueryParams) -> AppResult<QueryPage> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.inner.query(params).await
        }
        async fn scan(&self, table_name: &str) -> AppResult<Vec<Item>> {
            self.inner.scan(table_name).await
        }
        async fn health_check(&self, table_name: &str) -> bool {
            self.inner.health_check(table_name).await
        }
    }

    struct FailingStore;

    #[async_trait]
    impl ItemStore for FailingStore {
        async fn get_item(&self, _: &str, _: Item) -> AppResult<Option<Item>> {
            unreachable!()
        }
        async fn put_item(&self, _: &str, _: Item) -> AppResult<()> {
            unreachable!()
        }
        async fn delete_item(&self, _: &str, _: Item) -> AppResult<()> {
            unreachable!()
        }
        async fn query(&self, _: &QueryParams) -> AppResult<QueryPage> {
            Err(AppError::StoreOperationError("throttled".into()))
        }
        async fn scan(&self, _: &str) -> AppResult<Vec<Item>> {
            unreachable!()
        }
        async fn health_check(&self, _: &str) -> bool {
            false
        }
    }

    async fn seeded_store(count: usize) -> CountingStore {
        let inner = InMemoryItemStore::new().with_table(
            TableSchema::new("events", "owner", Some("seq")).with_index("by-kind", "kind"),
        );
        for i in 0..count {
            let item = Item::from([
                ("owner".to_string(), AttributeValue::S("alice".into())),
                ("seq".to_string(), AttributeValue::S(format!("{i:05}"))),
                ("kind".to_string(), AttributeValue::S("visit".into())),
            ]);
            inner.put_item("events", item).await.unwrap();
        }
        CountingStore {
            inner,
            queries: AtomicUsize::new(0),
        }
    }

    #[tokio::test]
    async fn collects_every_page() -> anyhow::Result<()> {
        let store = seeded_store(2500).await;
        let params = QueryParams::new("events", "owner", AttributeValue::S("alice".into()), 1000);

        let items = query_all(&store, params).await?;

        assert_eq!(items.len(), 2500);
        assert_eq!(store.queries.load(Ordering::SeqCst), 3);
        let seqs: Vec<_> = items
            .iter()
            .map(|i| i["seq"].as_s().unwrap().clone())
            .collect();
        let mut sorted = seqs.clone();
        sorted.sort();
        assert_eq!(seqs, sorted);
        Ok(())
    }

    #[tokio::test]
    async fn follows_pages_on_a_secondary_index() -> anyhow::Result<()> {
        let store = seeded_store(250).await;
        let params =
            QueryParams::new("events", "kind", AttributeValue::S("visit".into()), 100)
                .with_index("by-kind");

        let items = query_all(&store, params).await?;

        assert_eq!(items.len(), 250);
        assert_eq!(store.queries.load(Ordering::SeqCst), 3);
        Ok(())
    }

    #[tokio::test]
    async fn pages_are_requested_on_demand() -> anyhow::Result<()> {
        let store = seeded_store(30).await;
        let params = QueryParams::new("events", "owner", AttributeValue::S("alice".into()), 10);

        let mut pages = std::pin::pin!(query_pages(&store, params));
        let first = pages.try_next().await?.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(store.queries.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_result_is_a_single_call() -> anyhow::Result<()> {
        let store = seeded_store(5).await;
        let params = QueryParams::new("events", "owner", AttributeValue::S("bob".into()), 10);

        let items = query_all(&store, params).await?;

        assert!(items.is_empty());
        assert_eq!(store.queries.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let params = QueryParams::new("events", "owner", AttributeValue::S("alice".into()), 10);
        let res = query_all(&FailingStore, params).await;
        assert!(matches!(res, Err(AppError::StoreOperationError(_))));
    }
}
