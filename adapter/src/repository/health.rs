use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use crate::database::StoreClient;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    db: StoreClient,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    async fn check_db(&self) -> bool {
        let cfg = self.db.config();
        let store = self.db.inner_ref();
        store.health_check(&cfg.reservation_table).await
            && store.health_check(&cfg.property_table).await
    }
}
