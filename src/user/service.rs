use std::sync::Arc;
use tracing::{info, instrument};

use super::models::UserModel;
use super::repository::UserRepository;
use crate::shared::AppError;

/// Service for user CRUD business logic.
///
/// Every mutation returns the full listing afterwards, which is what the
/// HTTP API responds with.
pub struct UserService {
    repository: Arc<dyn UserRepository + Send + Sync>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<UserModel>, AppError> {
        self.repository.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<Vec<UserModel>, AppError> {
        let user = self.repository.add(name).await?;
        info!(user_id = user.id, name = %user.name, "User created");

        self.repository.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn rename(&self, id: i64, name: &str) -> Result<Vec<UserModel>, AppError> {
        self.repository
            .update_name(id, name)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        info!(user_id = id, "User renamed");
        self.repository.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<Vec<UserModel>, AppError> {
        if !self.repository.remove(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        info!(user_id = id, "User deleted");
        self.repository.list_all().await
    }
}
