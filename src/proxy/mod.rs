// Public API - what other modules can use
pub use client::{UpstreamClient, DEFAULT_DATA_URL, DEFAULT_UPSTREAM_TIMEOUT};
pub use handlers::fetch_data;

// Internal modules
mod client;
mod handlers;
