use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    create_reservation, delete_reservation, show_available_count, show_customer_reservations,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", post(create_reservation))
        .route("/:id", delete(delete_reservation));

    Router::new()
        .nest("/reservation", reservation_routers)
        .route("/customers/reservation", get(show_customer_reservations))
        .route(
            "/properties/:id/reservation/available-count",
            get(show_available_count),
        )
}
