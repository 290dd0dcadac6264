use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers::{get_player_stats, StatsHandlers};

pub fn stats_routes(config: Arc<AppConfig>) -> Router {
    let handlers = Arc::new(StatsHandlers::new(&config));

    Router::new()
        .route("/{platform}/{username}", get(get_player_stats))
        .with_state(handlers)
}
