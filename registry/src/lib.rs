use std::sync::Arc;

use adapter::database::StoreClient;
use adapter::repository::{
    availability::AvailabilityRepositoryImpl, health::HealthCheckRepositoryImpl,
    property::PropertyRepositoryImpl, reservation::ReservationRepositoryImpl,
};
use kernel::repository::{
    availability::AvailabilityRepository, health::HealthCheckRepository,
    property::PropertyRepository, reservation::ReservationRepository,
};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    property_repository: Arc<dyn PropertyRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    availability_repository: Arc<dyn AvailabilityRepository>,
}

impl AppRegistry {
    pub fn new(db: StoreClient) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(db.clone()));
        let property_repository = Arc::new(PropertyRepositoryImpl::new(db.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(db.clone()));
        let availability_repository = Arc::new(AvailabilityRepositoryImpl::new(db));
        Self {
            health_check_repository,
            property_repository,
            reservation_repository,
            availability_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn property_repository(&self) -> Arc<dyn PropertyRepository> {
        self.property_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn availability_repository(&self) -> Arc<dyn AvailabilityRepository> {
        self.availability_repository.clone()
    }
}
