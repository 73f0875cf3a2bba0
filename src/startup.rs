use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::logging::logging_middleware;
use crate::resource;

/// Build the HTTP application around a shared configuration
pub fn build_router(app_config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/health", get(resource::health))
        .route("/api/criteria", get(resource::criteria::list_criteria))
        .route(
            "/api/criteria/{criterion_type}",
            get(resource::criteria::get_criterion),
        )
        .route("/api/filter/{mode}", get(resource::filter::get_filter))
        .route(
            "/api/filter/{mode}/criteria",
            post(resource::filter::build_criterion),
        )
        .layer(middleware::from_fn(logging_middleware))
        .with_state(app_config)
}
