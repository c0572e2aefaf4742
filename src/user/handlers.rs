use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::UserModel,
    service::UserService,
    types::{CreateUserRequest, UpdateUserRequest},
};
use crate::shared::{AppError, AppState};

/// HTTP handler for listing all users
///
/// GET /users
#[instrument(name = "list_users", skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserModel>>, AppError> {
    let service = UserService::new(Arc::clone(&state.user_repository));
    let users = service.list().await?;

    info!(user_count = users.len(), "Users listed");
    Ok(Json(users))
}

/// HTTP handler for adding a user
///
/// POST /users
/// Returns the full listing including the new user
#[instrument(name = "create_user", skip(state, request))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<Vec<UserModel>>, AppError> {
    info!(name = %request.name, "Creating user");

    let service = UserService::new(Arc::clone(&state.user_repository));
    let users = service.create(&request.name).await?;

    Ok(Json(users))
}

/// HTTP handler for renaming a user
///
/// PUT /users/:id
/// Returns the full listing, or 404 when the id is absent
#[instrument(name = "update_user", skip(state, request))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<Vec<UserModel>>, AppError> {
    info!(id, name = %request.name, "Renaming user");

    let service = UserService::new(Arc::clone(&state.user_repository));
    let users = service.rename(id, &request.name).await?;

    Ok(Json(users))
}

/// HTTP handler for deleting a user
///
/// DELETE /users/:id
/// Returns the remaining listing, or 404 when the id is absent
#[instrument(name = "delete_user", skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<UserModel>>, AppError> {
    info!(id, "Deleting user");

    let service = UserService::new(Arc::clone(&state.user_repository));
    let users = service.delete(id).await?;

    Ok(Json(users))
}
