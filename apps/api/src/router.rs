use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use scrape_cell::router::scrape_routes;
use shared_config::AppConfig;
use stats_cell::router::stats_routes;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "R6 stats proxy API is running!" }))
        .nest("/r6", stats_routes(state.clone()))
        .nest("/r6stats", scrape_routes(state))
}
