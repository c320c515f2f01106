use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::PropertyId,
    property::{
        event::{CreateProperty, UpdateProperty},
        Property, DEFAULT_TOTAL_ROOMS_NUMBER,
    },
};
use kernel::repository::property::PropertyRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::property::{to_property, PropertyRow},
    StoreClient,
};

#[derive(new)]
pub struct PropertyRepositoryImpl {
    db: StoreClient,
}

// 空室計算からも使うため、リポジトリの外に切り出している
pub(crate) async fn find_property(
    db: &StoreClient,
    property_id: PropertyId,
) -> AppResult<Option<Property>> {
    db.inner_ref()
        .get_item(&db.config().property_table, PropertyRow::key(property_id))
        .await?
        .map(to_property)
        .transpose()
}

#[async_trait]
impl PropertyRepository for PropertyRepositoryImpl {
    async fn create(&self, event: CreateProperty) -> AppResult<Property> {
        let property = Property {
            id: PropertyId::new(),
            name: event.name,
            description: event.description,
            total_rooms_number: event
                .total_rooms_number
                .unwrap_or(DEFAULT_TOTAL_ROOMS_NUMBER),
            created_at: Utc::now(),
        };

        self.db
            .inner_ref()
            .put_item(
                &self.db.config().property_table,
                PropertyRow::from(&property).into(),
            )
            .await?;

        tracing::info!(
            property_id = %property.id,
            total_rooms_number = property.total_rooms_number,
            "property registered"
        );
        Ok(property)
    }

    async fn find_all(&self) -> AppResult<Vec<Property>> {
        self.db
            .inner_ref()
            .scan(&self.db.config().property_table)
            .await?
            .into_iter()
            .map(to_property)
            .collect()
    }

    async fn find_by_id(&self, property_id: PropertyId) -> AppResult<Option<Property>> {
        find_property(&self.db, property_id).await
    }

    async fn update(&self, event: UpdateProperty) -> AppResult<Property> {
        let UpdateProperty {
            property_id,
            name,
            description,
            total_rooms_number,
        } = event;

        let stored = find_property(&self.db, property_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Property not found".into()))?;

        // 空文字は未指定と同じ扱い
        let property = Property {
            name: name.filter(|v| !v.is_empty()).unwrap_or(stored.name),
            description: description
                .filter(|v| !v.is_empty())
                .unwrap_or(stored.description),
            total_rooms_number: total_rooms_number.unwrap_or(stored.total_rooms_number),
            ..stored
        };

        self.db
            .inner_ref()
            .put_item(
                &self.db.config().property_table,
                PropertyRow::from(&property).into(),
            )
            .await?;

        tracing::info!(
            property_id = %property.id,
            total_rooms_number = property.total_rooms_number,
            "property updated"
        );
        Ok(property)
    }
}
