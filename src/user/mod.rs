// Public API - what other modules can use
pub use handlers::{create_user, delete_user, list_users, update_user};
pub use models::UserModel;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
mod service;
mod types;
