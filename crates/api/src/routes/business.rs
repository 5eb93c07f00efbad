use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/businesses", post(handlers::business::create_business))
        .route("/api/businesses/:id", get(handlers::business::get_business))
        .route(
            "/api/businesses/:id/hours",
            put(handlers::business::update_hours),
        )
        .route(
            "/api/businesses/:id/services",
            get(handlers::business::list_services).post(handlers::business::create_service),
        )
}
