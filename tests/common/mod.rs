#![allow(dead_code)]

use axum::Router;
use std::sync::Arc;
use url::form_urlencoded;

use list_filter::config::{AppConfig, FilterConfig};
use list_filter::startup::build_router;
use list_filter::Criterion;

/// Create a test config with the stock paging limits
pub fn create_test_app_config() -> AppConfig {
    AppConfig::default_config()
}

/// Create a test app with a custom page size limit
pub fn create_test_app_config_with_limits(default_per_page: u32, max_per_page: u32) -> AppConfig {
    let mut config = AppConfig::default_config();
    config.filter = FilterConfig {
        default_items_per_page: default_per_page,
        max_items_per_page: max_per_page,
    };
    config
}

pub fn setup_test_app(app_config: AppConfig) -> Router {
    build_router(Arc::new(app_config))
}

/// `c=` query pair for a criterion, percent-encoded as a browser would send it
pub fn criterion_param(criterion: &Criterion) -> String {
    let encoded: String = form_urlencoded::byte_serialize(criterion.encode_url().as_bytes()).collect();
    format!("c={}", encoded)
}
