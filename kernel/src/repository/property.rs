use crate::model::{
    id::PropertyId,
    property::{
        event::{CreateProperty, UpdateProperty},
        Property,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn create(&self, event: CreateProperty) -> AppResult<Property>;
    async fn find_all(&self) -> AppResult<Vec<Property>>;
    async fn find_by_id(&self, property_id: PropertyId) -> AppResult<Option<Property>>;
    // 登録済みの物件だけを更新でき、存在しない場合は EntityNotFound を返す
    async fn update(&self, event: UpdateProperty) -> AppResult<Property>;
}
