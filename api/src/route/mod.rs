use axum::Router;
use registry::AppRegistry;

pub mod health;
pub mod property;
pub mod reservation;

use health::build_health_check_routers;
use property::build_property_routers;
use reservation::build_reservation_routers;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(build_health_check_routers())
        .merge(build_property_routers())
        .merge(build_reservation_routers())
}
