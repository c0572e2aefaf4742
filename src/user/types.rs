use serde::Deserialize;

/// Request body for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Request body for renaming a user
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}
