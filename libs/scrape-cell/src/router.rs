use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers::{get_scraped_stats, ScrapeHandlers};

pub fn scrape_routes(config: Arc<AppConfig>) -> Router {
    let handlers = Arc::new(ScrapeHandlers::new(&config));

    Router::new()
        .route("/{platform}/{username}", get(get_scraped_stats))
        .with_state(handlers)
}
