pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types
pub use models::{ScrapeError, ScrapedStats};

// Re-export main router for integration
pub use router::scrape_routes;
