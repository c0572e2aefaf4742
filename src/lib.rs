// Library crate for the roster service
// This file exposes the public API for integration tests

pub mod app;
pub mod auth;
pub mod proxy;
pub mod shared;
pub mod user;

// Re-export commonly used types for easier access in tests
pub use shared::{AppError, AppState};
pub use user::UserModel;
