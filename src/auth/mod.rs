// Public API - what other modules can use
pub use handlers::login;
pub use middleware::require_auth;
pub use types::{AccessClaims, LoginRequest, LoginResponse};

// Internal modules
mod handlers;
mod middleware;
mod service;
pub mod token;
pub mod types;
