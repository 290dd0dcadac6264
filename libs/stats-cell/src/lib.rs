pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types
pub use models::{BoardStats, PlatformMapping, PlayerStats, StatsError};

// Re-export main router for integration
pub use router::stats_routes;
