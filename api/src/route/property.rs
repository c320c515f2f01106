use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::property::{
    register_property, show_property, show_property_list, update_property,
};

pub fn build_property_routers() -> Router<AppRegistry> {
    let property_routers = Router::new()
        .route("/", post(register_property))
        .route("/", get(show_property_list))
        .route("/:id", get(show_property))
        .route("/:id", put(update_property));

    Router::new().nest("/properties", property_routers)
}
